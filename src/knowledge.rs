use crate::enums::{Color, Rank};
use crate::subset::{ColorSet, RankSet};

/// What the holder of a card has learned about it from hints.
///
/// Known flags only ever go from false to true. A dimension also becomes
/// known once four of its five values are ruled out.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Knowledge {
    color_known: bool,
    rank_known: bool,
    ruled_out_colors: ColorSet,
    ruled_out_ranks: RankSet,
}

impl Knowledge {
    pub fn new() -> Self {
        Knowledge::default()
    }

    pub fn is_color_known(&self) -> bool {
        self.color_known
    }

    pub fn is_rank_known(&self) -> bool {
        self.rank_known
    }

    pub fn is_fully_known(&self) -> bool {
        self.color_known && self.rank_known
    }

    pub fn ruled_out_colors(&self) -> ColorSet {
        self.ruled_out_colors
    }

    pub fn ruled_out_ranks(&self) -> RankSet {
        self.ruled_out_ranks
    }

    pub fn disclose_color(&mut self) {
        self.color_known = true;
    }

    pub fn disclose_rank(&mut self) {
        self.rank_known = true;
    }

    pub fn rule_out_color(&mut self, color: Color) {
        self.ruled_out_colors.add(color);
        if self.ruled_out_colors.len() == 4 {
            self.color_known = true;
        }
    }

    pub fn rule_out_rank(&mut self, rank: Rank) {
        self.ruled_out_ranks.add(rank);
        if self.ruled_out_ranks.len() == 4 {
            self.rank_known = true;
        }
    }
}
