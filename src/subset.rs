use crate::enums::{Color, Rank};

// bit i set = Color::ALL[i] / Rank::ALL[i] is in the set

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorSet(pub u8);

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RankSet(pub u8);

impl ColorSet {
    pub fn new_empty() -> Self {
        ColorSet(0)
    }

    pub fn new_full() -> Self {
        ColorSet(0b11111)
    }

    pub fn has(&self, color: Color) -> bool {
        self.0 & (1 << color.index()) != 0
    }

    /// Returns false if the color was already present.
    pub fn add(&mut self, color: Color) -> bool {
        let present = self.has(color);
        self.0 |= 1 << color.index();
        !present
    }

    pub fn intersect(&self, other: &ColorSet) -> ColorSet {
        ColorSet(self.0 & other.0)
    }

    pub fn complement(&self) -> ColorSet {
        ColorSet(!self.0 & Self::new_full().0)
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        Color::ALL.into_iter().filter(move |color| self.has(*color))
    }
}

impl FromIterator<Color> for ColorSet {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        let mut set = ColorSet::new_empty();
        for color in iter {
            set.add(color);
        }
        set
    }
}

impl RankSet {
    pub fn new_empty() -> Self {
        RankSet(0)
    }

    pub fn has(&self, rank: Rank) -> bool {
        self.0 & (1 << (rank.value() - 1)) != 0
    }

    /// Returns false if the rank was already present.
    pub fn add(&mut self, rank: Rank) -> bool {
        let present = self.has(rank);
        self.0 |= 1 << (rank.value() - 1);
        !present
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_reports_new_members_only() {
        let mut set = ColorSet::new_empty();
        assert!(set.add(Color::Blue));
        assert!(!set.add(Color::Blue));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn complement_stays_within_five_values() {
        let set: ColorSet = [Color::Red, Color::Green].into_iter().collect();
        let rest = set.complement();
        assert_eq!(rest.len(), 3);
        assert!(!rest.has(Color::Red));
        assert!(rest.has(Color::White));
    }

    #[test]
    fn intersection_keeps_shared_members() {
        let small: ColorSet = [Color::Blue].into_iter().collect();
        let large: ColorSet = [Color::Red, Color::Blue, Color::Green].into_iter().collect();
        assert_eq!(large.intersect(&small), small);
        assert!(large.intersect(&ColorSet::new_empty()).is_empty());
    }

    #[test]
    fn rank_add_reports_new_members_only() {
        let mut set = RankSet::new_empty();
        assert!(set.add(Rank::Five));
        assert!(!set.add(Rank::Five));
        assert!(set.has(Rank::Five));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn iteration_follows_enum_order() {
        let set: ColorSet = [Color::Green, Color::Red].into_iter().collect();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Color::Red, Color::Green]);
    }
}
