use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Generate one SQL query and print it
    Generate {
        /// Natural-language description of the rows to select
        #[arg(short, long)]
        condition: String,

        /// Table schema; defaults to the built-in table unless --no-default-schema is set
        #[arg(short, long)]
        schema: Option<String>,

        /// Hugging Face API token
        #[arg(long, env = "HF_TOKEN", hide_env_values = true)]
        api_key: Option<String>,

        /// Print `{"sql_query": ...}` instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Print the prompt that would be sent, without calling the model
    Prompt {
        #[arg(short, long)]
        condition: String,

        #[arg(short, long)]
        schema: Option<String>,
    },

    /// Start the HTTP server (API endpoints and HTML form)
    Serve {
        #[arg(short, long, default_value_t = crate::connector::http::server::DEFAULT_PORT)]
        port: u16,

        /// Bind to 0.0.0.0 instead of 127.0.0.1, exposing the server on all network interfaces
        #[arg(long)]
        public: bool,
    },
}
