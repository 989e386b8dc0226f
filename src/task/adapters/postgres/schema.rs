//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Store-assigned task identifier.
        id -> Int8,
        /// Unique task title.
        #[max_length = 255]
        title -> Varchar,
        /// Free-form task description.
        description -> Text,
        /// Completion flag.
        completed -> Bool,
        /// Optional due date.
        due_date -> Nullable<Date>,
    }
}
