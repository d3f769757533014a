use crate::matrix::VertexSet;

#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReachabilityState {
    pub iteration: usize,
    pub set: VertexSet,
}

impl From<VertexSet> for ReachabilityState {
    fn from(value: VertexSet) -> Self {
        ReachabilityState {
            iteration: 0,
            set: value,
        }
    }
}

impl From<&VertexSet> for ReachabilityState {
    fn from(value: &VertexSet) -> Self {
        Self::from(*value)
    }
}

impl From<ReachabilityState> for VertexSet {
    fn from(value: ReachabilityState) -> Self {
        value.set
    }
}
