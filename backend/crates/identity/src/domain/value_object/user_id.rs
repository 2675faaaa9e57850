use kernel::id::Id;

pub use kernel::id::markers::User as UserMarker;
pub type UserId = Id<UserMarker>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_from_i64() {
        let user_id = UserId::from_i64(7);
        assert_eq!(user_id.as_i64(), 7);
    }
}
