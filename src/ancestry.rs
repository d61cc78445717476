/// Reference panels used for the three-way local ancestry assignment.
/// Loci files encode these as indices 0, 1, 2; the panel set is fixed
/// and never derived from input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ancestry {
    Pel = 0,
    Ceu = 1,
    Yri = 2,
}

pub const NUM_ANCESTRIES: usize = 3;

impl Ancestry {
    pub const ALL: [Ancestry; NUM_ANCESTRIES] = [Ancestry::Pel, Ancestry::Ceu, Ancestry::Yri];

    /// Decode a raw index from a loci file. Anything outside 0..=2 is
    /// corrupt input and gets no panel.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Ancestry::Pel),
            1 => Some(Ancestry::Ceu),
            2 => Some(Ancestry::Yri),
            _ => None,
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn label(&self) -> &'static str {
        match self {
            Ancestry::Pel => "PEL",
            Ancestry::Ceu => "CEU",
            Ancestry::Yri => "YRI",
        }
    }
}

#[test]
fn decode_panel_indices() {
    for a in Ancestry::ALL {
        assert_eq!(Ancestry::from_index(a.index() as u8), Some(a));
    }
    assert_eq!(Ancestry::from_index(3), None);
    assert_eq!(Ancestry::from_index(u8::MAX), None);
}

#[test]
fn panel_labels() {
    let labels: Vec<_> = Ancestry::ALL.iter().map(|a| a.label()).collect();
    assert_eq!(labels, vec!["PEL", "CEU", "YRI"]);
}
