//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// Top-level screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Tasks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Danger,
}

/// Transient confirmation message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Unique per notice so an old dismiss timer leaves a newer notice alone
    pub id: u32,
    pub kind: NoticeKind,
    pub message: String,
}

/// Hands out notice ids in increasing order, independent of what is shown
#[derive(Debug, Default, Clone, Copy)]
pub struct NoticeIds {
    next: u32,
}

impl NoticeIds {
    pub fn next_id(&mut self) -> u32 {
        let id = self.next;
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// Clear `current` only if it still holds the notice with `id`
fn clear_notice(current: &mut Option<Notice>, id: u32) {
    if current.as_ref().is_some_and(|n| n.id == id) {
        *current = None;
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current screen - read
    pub view: ReadSignal<View>,
    /// Current screen - write
    set_view: WriteSignal<View>,
    /// Trigger to reload tasks from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload tasks from backend - write
    set_reload_trigger: WriteSignal<u32>,
    pub notice: ReadSignal<Option<Notice>>,
    set_notice: WriteSignal<Option<Notice>>,
    notice_ids: StoredValue<NoticeIds>,
    /// Tasks per page
    pub page_size: u32,
}

impl AppContext {
    pub fn new(
        view: (ReadSignal<View>, WriteSignal<View>),
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        notice: (ReadSignal<Option<Notice>>, WriteSignal<Option<Notice>>),
        page_size: u32,
    ) -> Self {
        Self {
            view: view.0,
            set_view: view.1,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            notice: notice.0,
            set_notice: notice.1,
            notice_ids: StoredValue::new(NoticeIds::default()),
            page_size,
        }
    }

    pub fn navigate(&self, view: View) {
        self.set_view.set(view);
    }

    /// Trigger a reload of the current task page
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn notify(&self, kind: NoticeKind, message: impl Into<String>) {
        let mut id = 0;
        self.notice_ids.update_value(|ids| id = ids.next_id());
        self.set_notice.set(Some(Notice {
            id,
            kind,
            message: message.into(),
        }));
    }

    /// Clear the notice if it is still the one with `id`
    pub fn dismiss(&self, id: u32) {
        self.set_notice.update(|current| clear_notice(current, id));
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notice(id: u32) -> Option<Notice> {
        Some(Notice {
            id,
            kind: NoticeKind::Success,
            message: "Task Created Successfully".to_string(),
        })
    }

    #[test]
    fn test_notice_ids_do_not_restart_after_dismiss() {
        let mut ids = NoticeIds::default();
        let mut current = notice(ids.next_id());
        clear_notice(&mut current, 0);
        assert!(current.is_none());

        // The first notice's timer fires after a newer notice is shown
        current = notice(ids.next_id());
        clear_notice(&mut current, 0);
        assert_eq!(current.map(|n| n.id), Some(1));
    }

    #[test]
    fn test_clear_notice_matches_id() {
        let mut current = notice(4);
        clear_notice(&mut current, 3);
        assert!(current.is_some());
        clear_notice(&mut current, 4);
        assert!(current.is_none());
    }
}
