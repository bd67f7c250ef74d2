pub(crate) trait OptionExtension<T> {
    /// Unwraps an [`Option`] that the caller knows to be [`Some`], with [`unreachable!`] in the
    /// [`None`] branch. Used for slots whose marker has already been checked, and for free slots
    /// that the table's capacity guarantees.
    ///
    /// No panics section is given: reaching the None branch means an internal invariant of the
    /// collection was broken, not that the caller misused the API.
    fn unreachable(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    #[track_caller]
    fn unreachable(self) -> T {
        match self {
            Some(val) => val,
            None => unreachable!("a hash table invariant was broken"),
        }
    }
}
