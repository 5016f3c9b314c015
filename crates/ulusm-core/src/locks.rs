use std::{collections::HashMap, sync::Arc};

use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::UserId;

/// Lazily created async mutex per user.
///
/// Holding the guard serializes work for one user without blocking anyone else.
#[derive(Default)]
pub struct UserLocks {
    inner: Mutex<HashMap<UserId, Arc<Mutex<()>>>>,
}

impl UserLocks {
    pub async fn lock_user(&self, user_id: UserId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut map = self.inner.lock().await;
            map.entry(user_id)
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };
        lock.lock_owned().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn same_user_waits_other_users_do_not() {
        let locks = Arc::new(UserLocks::default());
        let held = locks.lock_user(UserId(1)).await;

        // A different user is never blocked.
        let other = tokio::time::timeout(Duration::from_millis(100), locks.lock_user(UserId(2)))
            .await;
        assert!(other.is_ok());

        let same = tokio::time::timeout(Duration::from_millis(50), locks.lock_user(UserId(1)))
            .await;
        assert!(same.is_err(), "second lock for the same user must wait");

        drop(held);
        let same = tokio::time::timeout(Duration::from_millis(100), locks.lock_user(UserId(1)))
            .await;
        assert!(same.is_ok());
    }
}
