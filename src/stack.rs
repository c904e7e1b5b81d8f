/// A minimal LIFO used by the tree's iterative walks so that degenerate (list shaped) trees
/// can't overflow the call stack.
pub(crate) struct Stack<T> {
    frames: Vec<T>,
}

impl<T> Stack<T> {
    pub(crate) fn new() -> Self {
        Self { frames: Vec::new() }
    }

    pub(crate) fn push(&mut self, value: T) {
        self.frames.push(value);
    }

    pub(crate) fn pop(&mut self) -> Option<T> {
        self.frames.pop()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
