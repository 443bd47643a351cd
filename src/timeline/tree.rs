use crate::timeline::keyframe::Keyframe;

/// The nested scalar structure being animated.
///
/// Branch children keep their insertion order, so iteration (and therefore
/// evaluation) is deterministic. The shape of a tree is fixed at
/// construction; the evaluator only ever rewrites leaf values.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueNode {
    Leaf(f32),
    Branch(Vec<(String, ValueNode)>),
}

impl ValueNode {
    #[must_use]
    pub fn leaf(value: f32) -> Self {
        Self::Leaf(value)
    }

    #[must_use]
    pub fn branch<K, I>(children: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, ValueNode)>,
    {
        Self::Branch(
            children
                .into_iter()
                .map(|(key, node)| (key.into(), node))
                .collect(),
        )
    }

    /// Leaf value at a `.`-separated path, if the path names a leaf.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<f32> {
        let mut node = self;
        for key in path.split('.') {
            node = node.child(key)?;
        }
        node.as_leaf()
    }

    /// Writes the leaf at a `.`-separated path. Returns `false` when the
    /// path does not name a leaf.
    pub fn set(&mut self, path: &str, value: f32) -> bool {
        let mut node = self;
        for key in path.split('.') {
            let Some(child) = node.child_mut(key) else {
                return false;
            };
            node = child;
        }
        if let Self::Leaf(leaf) = node {
            *leaf = value;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn child(&self, key: &str) -> Option<&ValueNode> {
        match self {
            Self::Leaf(_) => None,
            Self::Branch(children) => children
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, node)| node),
        }
    }

    fn child_mut(&mut self, key: &str) -> Option<&mut ValueNode> {
        match self {
            Self::Leaf(_) => None,
            Self::Branch(children) => children
                .iter_mut()
                .find(|(k, _)| k == key)
                .map(|(_, node)| node),
        }
    }

    #[must_use]
    pub fn as_leaf(&self) -> Option<f32> {
        match self {
            Self::Leaf(value) => Some(*value),
            Self::Branch(_) => None,
        }
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Self::Leaf(_) => "leaf",
            Self::Branch(_) => "branch",
        }
    }
}

/// The authored definition tree: same shape as the [`ValueNode`] it
/// animates, with every leaf replaced by an ordered keyframe list.
///
/// An empty keyframe list means the track never changes and is immediately
/// complete at its initial value.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackNode {
    Leaf(Vec<Keyframe>),
    Branch(Vec<(String, TrackNode)>),
}

impl TrackNode {
    #[must_use]
    pub fn track<I>(keyframes: I) -> Self
    where
        I: IntoIterator<Item = Keyframe>,
    {
        Self::Leaf(keyframes.into_iter().collect())
    }

    /// A track with no keyframes: holds its initial value forever.
    #[must_use]
    pub fn hold() -> Self {
        Self::Leaf(Vec::new())
    }

    #[must_use]
    pub fn branch<K, I>(children: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, TrackNode)>,
    {
        Self::Branch(
            children
                .into_iter()
                .map(|(key, node)| (key.into(), node))
                .collect(),
        )
    }

    pub(crate) fn child(&self, key: &str) -> Option<&TrackNode> {
        match self {
            Self::Leaf(_) => None,
            Self::Branch(children) => children
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, node)| node),
        }
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Self::Leaf(_) => "track",
            Self::Branch(_) => "branch",
        }
    }
}
