pub struct ReminderFields;

impl ReminderFields {
    pub const ID: &'static str = "id";
    pub const TITLE: &'static str = "title";
    pub const DESCRIPTION: &'static str = "description";
    pub const DUE_DATE: &'static str = "dueDate";
    pub const IS_COMPLETED: &'static str = "isCompleted";
}
