// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use parking_lot::{Mutex, ReentrantMutex};
use tracing::info;

use crate::domain::avatars::models::{AvatarEvent, AvatarListener};
use crate::domain::shared::models::AccountId;
use crate::util::ListenerRegistry;

/// Holds the avatar of the local user and informs listeners when it changes.
pub struct AvatarNotifier {
    account_id: AccountId,
    avatar: Mutex<Option<Arc<[u8]>>>,
    fire_lock: ReentrantMutex<()>,
    listeners: ListenerRegistry<dyn AvatarListener>,
}

impl AvatarNotifier {
    pub fn new(account_id: AccountId) -> Self {
        Self {
            account_id,
            avatar: Default::default(),
            fire_lock: ReentrantMutex::new(()),
            listeners: ListenerRegistry::new("avatar"),
        }
    }

    pub fn add_avatar_listener(&self, listener: Arc<dyn AvatarListener>) {
        self.listeners.add(listener);
    }

    pub fn remove_avatar_listener(&self, listener: &Arc<dyn AvatarListener>) {
        self.listeners.remove(listener);
    }

    pub fn avatar(&self) -> Option<Arc<[u8]>> {
        self.avatar.lock().clone()
    }

    /// Replaces the avatar. Listeners are only called if the image data changed.
    pub fn set_avatar(&self, avatar: Option<Vec<u8>>) {
        let _guard = self.fire_lock.lock();

        let avatar = avatar.map(Arc::<[u8]>::from);
        {
            let mut current = self.avatar.lock();
            if *current == avatar {
                return;
            }
            *current = avatar.clone();
        }

        self.fire_avatar_changed(avatar)
    }

    pub fn fire_avatar_changed(&self, avatar: Option<Arc<[u8]>>) {
        info!(
            account = %self.account_id,
            size = avatar.as_ref().map(|avatar| avatar.len()).unwrap_or_default(),
            "Avatar changed."
        );

        let event = AvatarEvent {
            account_id: self.account_id.clone(),
            avatar,
        };
        self.listeners.dispatch(|listener| listener.avatar_changed(&event));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Default)]
    struct Recorder {
        sizes: Mutex<Vec<Option<usize>>>,
    }

    impl AvatarListener for Recorder {
        fn avatar_changed(&self, event: &AvatarEvent) {
            self.sizes
                .lock()
                .push(event.avatar.as_ref().map(|avatar| avatar.len()))
        }
    }

    #[test]
    fn test_only_changes_are_dispatched() {
        let notifier = AvatarNotifier::new("account-1".into());
        let recorder = Arc::new(Recorder::default());
        notifier.add_avatar_listener(recorder.clone());

        notifier.set_avatar(Some(vec![1, 2, 3]));
        notifier.set_avatar(Some(vec![1, 2, 3]));
        notifier.set_avatar(None);
        notifier.set_avatar(None);

        assert_eq!(*recorder.sizes.lock(), vec![Some(3), None]);
        assert_eq!(notifier.avatar(), None);
    }
}
