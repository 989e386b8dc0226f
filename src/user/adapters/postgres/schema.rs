//! Diesel schema for user account persistence.

diesel::table! {
    /// User account records.
    users (id) {
        /// Store-assigned account identifier.
        id -> Int8,
        /// Unique username.
        #[max_length = 100]
        username -> Varchar,
        /// Stored credential (the hasher's output).
        #[max_length = 255]
        password -> Varchar,
        /// Unique email address.
        #[max_length = 255]
        email -> Varchar,
        /// Comma-joined role label set.
        #[max_length = 255]
        roles -> Varchar,
    }
}
