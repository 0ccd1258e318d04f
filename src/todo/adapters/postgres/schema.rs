//! Diesel schema for list and task persistence.

diesel::table! {
    /// Named lists owned by users.
    lists (id) {
        /// List identifier.
        id -> Uuid,
        /// List title.
        #[max_length = 255]
        title -> Varchar,
        /// Owning user.
        user_id -> Uuid,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Tasks belonging to a list.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional free-form description.
        description -> Nullable<Text>,
        /// Optional due date.
        due_date -> Nullable<Date>,
        /// Completion status.
        #[max_length = 20]
        status -> Varchar,
        /// Manual order within the list.
        #[sql_name = "order"]
        sort_order -> Int4,
        /// Parent list.
        lists_id -> Uuid,
        /// Owning user.
        user_id -> Uuid,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(tasks -> lists (lists_id));

diesel::allow_tables_to_appear_in_same_query!(lists, tasks);
