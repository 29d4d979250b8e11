//! Outbound delivery of announcement text.

/// Delivers text to everyone in a room.
///
/// Fire-and-forget: delivery failures are the implementor's business.
pub trait Notifier<K> {
    /// Send `text` to `room`.
    fn announce(&mut self, room: &K, text: &str);
}

impl<K, N: Notifier<K> + ?Sized> Notifier<K> for &mut N {
    fn announce(&mut self, room: &K, text: &str) {
        (**self).announce(room, text);
    }
}

/// Keeps every message in memory, in send order.
#[derive(Clone, Debug)]
pub struct RecordingNotifier<K> {
    sent: Vec<(K, String)>,
}

impl<K> Default for RecordingNotifier<K> {
    fn default() -> Self {
        Self { sent: Vec::new() }
    }
}

impl<K> RecordingNotifier<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All (room, text) pairs sent so far.
    #[must_use]
    pub fn sent(&self) -> &[(K, String)] {
        &self.sent
    }

    /// Drain everything recorded so far.
    pub fn take(&mut self) -> Vec<(K, String)> {
        std::mem::take(&mut self.sent)
    }
}

impl<K: PartialEq> RecordingNotifier<K> {
    /// Messages sent to one room, in order.
    #[must_use]
    pub fn messages_for(&self, room: &K) -> Vec<&str> {
        self.sent
            .iter()
            .filter(|(r, _)| r == room)
            .map(|(_, text)| text.as_str())
            .collect()
    }
}

impl<K: Clone> Notifier<K> for RecordingNotifier<K> {
    fn announce(&mut self, room: &K, text: &str) {
        self.sent.push((room.clone(), text.to_string()));
    }
}
