/// Describes the ownership of a [`Buffer`](crate::Buffer)'s memory.
#[derive(Debug, Clone, Copy, Eq, Default)]
pub enum AllocFlag {
    /// The buffer owns its memory and releases it on drop.
    #[default]
    None,
    /// The buffer only wraps memory that is released elsewhere.
    Wrapper,
}

impl AllocFlag {
    /// Returns `true` if dropping the owner should release the memory.
    #[inline]
    pub fn continue_deallocation(&self) -> bool {
        matches!(self, AllocFlag::None)
    }
}

impl PartialEq for AllocFlag {
    fn eq(&self, other: &Self) -> bool {
        core::mem::discriminant(self) == core::mem::discriminant(other)
    }
}
