//! DTOs for the users_sea adapter.

/// DTO for creating a user row with the configured starting balance.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub id: i64,
    pub starting_balance: i64,
}

impl UserCreate {
    pub fn new(id: i64, starting_balance: i64) -> Self {
        Self {
            id,
            starting_balance,
        }
    }
}
