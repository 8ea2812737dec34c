/// Keyboard key identifier.
///
/// Intentionally minimal: enough for prototype scenes (quit keys, arrows,
/// a handful of action keys). The runtime maps platform keycodes into these
/// variants; anything else lands in `Key::Unknown` with the platform code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Space,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    W,
    A,
    S,
    D,

    /// Platform-dependent key not represented here.
    Unknown(u32),
}
