use crate::domain::QueryTarget;

pub const DEFAULT_TABLE: &str = "assigned_to_resolve_report";

const DEFAULT_COLUMNS: &[(&str, &str)] = &[
    ("id", "INT64 NOT NULL"),
    ("cm_id", "INT64"),
    ("ticket_id", "STRING(256)"),
    ("ticket_status", "STRING(1)"),
    ("agent_id", "INT64"),
    ("reopen_by_agent_id", "INT64"),
    ("created_date", "TIMESTAMP"),
    ("assigned_date", "TIMESTAMP"),
    ("first_replied_date", "TIMESTAMP"),
    ("disposed_date", "TIMESTAMP"),
    ("disposition_type", "STRING(5)"),
    ("disposition_folder_id", "INT64"),
    ("agent_replied_count", "INT64"),
    ("customer_replied_count", "INT64"),
    ("dispose_remark", "STRING"),
    ("source", "STRING(1)"),
    ("is_out_of_sla", "BOOL"),
    ("ticket_category", "STRING(1)"),
    ("type_reference", "STRING(100)"),
    ("task_id", "INT64"),
    ("dispose_id", "INT64"),
    ("current_status", "STRING(1)"),
    ("is_created", "BOOL"),
    ("last_reply_time", "TIMESTAMP"),
    ("first_customer_replied_time", "TIMESTAMP"),
    ("last_customer_replied_time", "TIMESTAMP"),
    ("last_reply_by", "INT64"),
    ("landing_folder_id", "INT64"),
    ("call_back_time", "TIMESTAMP"),
    ("create_reason", "STRING(50)"),
    ("landing_queue", "STRING(50)"),
    ("last_queue", "STRING(50)"),
    ("is_first_assign", "BOOL"),
    ("first_assign_time", "TIMESTAMP"),
    ("is_resolve_without_dispose", "BOOL"),
    ("agent_remark", "STRING"),
    ("first_replied_by", "INT64"),
    ("ticket_create_date", "TIMESTAMP"),
    ("average_time", "FLOAT64"),
    ("reopen_count", "INT64"),
    ("email", "STRING(100)"),
    ("phone", "STRING(100)"),
    ("is_sub_task", "BOOL"),
    ("is_chat_bot", "BOOL"),
];

/// Built-in table definition used when a caller does not send a schema.
pub fn default_schema(target: &QueryTarget) -> String {
    let columns = DEFAULT_COLUMNS
        .iter()
        .map(|(name, ty)| format!("  {name} {ty}"))
        .collect::<Vec<_>>()
        .join(",\n");

    format!("TABLE {} (\n{}\n)", target.qualify(DEFAULT_TABLE), columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_schema_is_qualified_with_target() {
        let schema = default_schema(&QueryTarget::new("proj", "ds"));
        assert!(schema.starts_with("TABLE proj.ds.assigned_to_resolve_report ("));
        assert!(schema.contains("  created_date TIMESTAMP,"));
        assert!(schema.ends_with("  is_chat_bot BOOL\n)"));
    }

    #[test]
    fn default_schema_lists_every_column_once() {
        let schema = default_schema(&QueryTarget::default());
        assert_eq!(schema.lines().count(), DEFAULT_COLUMNS.len() + 2);
    }
}
