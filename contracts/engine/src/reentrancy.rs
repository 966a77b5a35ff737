use crate::errors::Error;
use soroban_sdk::{Env, Symbol};

/// RAII lock over a temporary-storage flag.
///
/// Every mutating entrypoint acquires the guard on entry; `Drop` releases it
/// on every exit path, error returns included. A nested mutating call that
/// arrives while the flag is set (a token-transfer callback re-entering the
/// engine) fails with `ReentrantCall`.
pub struct ReentrancyGuard<'a> {
    env: &'a Env,
}

impl<'a> ReentrancyGuard<'a> {
    pub fn new(env: &'a Env) -> Result<Self, Error> {
        let key = Symbol::new(env, "REENTRANCY_LOCK");
        if env.storage().temporary().has(&key) {
            return Err(Error::ReentrantCall);
        }
        env.storage().temporary().set(&key, &true);
        Ok(Self { env })
    }
}

impl<'a> Drop for ReentrancyGuard<'a> {
    fn drop(&mut self) {
        let key = Symbol::new(self.env, "REENTRANCY_LOCK");
        self.env.storage().temporary().remove(&key);
    }
}
