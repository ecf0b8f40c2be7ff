/// Interaction mode of the list, reported to scroll-state listeners.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScrollState {
    /// Not moving.
    #[default]
    Idle,
    /// Following a finger.
    TouchScroll,
    /// Moving under physics: a fling or an animated `scroll_to`.
    Fling,
}
