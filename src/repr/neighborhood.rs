use itertools::Itertools;
use smallvec::{Array, SmallVec};

use super::*;

/// Basic Neighborhood-Impl. using `Vec<Neighbor>`
#[derive(Debug, Default, Clone)]
pub struct ArrNeighborhood(pub Vec<Neighbor>);

impl Neighborhood for ArrNeighborhood {
    fn new(_n: NumNodes) -> Self {
        Self(Default::default())
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    fn neighbors(&self) -> impl Iterator<Item = Neighbor> + '_ {
        self.0.iter().copied()
    }

    fn add_neighbor(&mut self, v: Node, w: Weight) {
        self.0.push(Neighbor::new(v, w));
    }

    fn set_weight(&mut self, v: Node, w: Weight) -> bool {
        if let Some(nb) = self.0.iter_mut().find(|nb| nb.node == v) {
            nb.weight = w;
            true
        } else {
            false
        }
    }

    fn try_remove_neighbor(&mut self, v: Node) -> bool {
        if let Some((pos, _)) = self.0.iter().find_position(|nb| nb.node == v) {
            self.0.swap_remove(pos);
            true
        } else {
            false
        }
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

/// Like [`ArrNeighborhood`] but uses `SmallVec<[Neighbor; N]>` instead.
/// Prefer this if the graph is known to be sparse.
#[derive(Debug, Default, Clone)]
pub struct SparseNeighborhood<const N: usize = 4>(pub SmallVec<[Neighbor; N]>)
where
    [Neighbor; N]: Array<Item = Neighbor>;

impl<const N: usize> Neighborhood for SparseNeighborhood<N>
where
    [Neighbor; N]: Array<Item = Neighbor>,
{
    fn new(_n: NumNodes) -> Self {
        Self(Default::default())
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    fn neighbors(&self) -> impl Iterator<Item = Neighbor> + '_ {
        self.0.iter().copied()
    }

    fn add_neighbor(&mut self, v: Node, w: Weight) {
        self.0.push(Neighbor::new(v, w));
    }

    fn set_weight(&mut self, v: Node, w: Weight) -> bool {
        if let Some(nb) = self.0.iter_mut().find(|nb| nb.node == v) {
            nb.weight = w;
            true
        } else {
            false
        }
    }

    fn try_remove_neighbor(&mut self, v: Node) -> bool {
        if let Some((pos, _)) = self.0.iter().find_position(|nb| nb.node == v) {
            self.0.swap_remove(pos);
            true
        } else {
            false
        }
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}
