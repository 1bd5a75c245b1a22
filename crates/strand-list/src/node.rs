//! List nodes.

/// Owning link to the next node, or the end of the chain.
///
/// Each node is owned by exactly one link, its predecessor's `next` or
/// the list's `head`, so no link can point back into the chain.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) data: T,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn boxed(data: T, next: Link<T>) -> Box<Self> {
        Box::new(Self { data, next })
    }
}
