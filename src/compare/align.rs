use crate::library::{AlbumTrackTable, TrackRecord};

/// One report row: a track number present on the left, the right, or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignedPair<'a> {
    pub left: Option<&'a TrackRecord>,
    pub right: Option<&'a TrackRecord>,
}

/// Merge-join both tables on ascending track number.
///
/// Every track of either table ends up in exactly one pair.
pub fn align_tracks<'a>(
    left: &'a AlbumTrackTable,
    right: &'a AlbumTrackTable,
) -> Vec<AlignedPair<'a>> {
    let l: Vec<&TrackRecord> = left.tracks.values().collect();
    let r: Vec<&TrackRecord> = right.tracks.values().collect();

    let mut pairs = Vec::with_capacity(l.len().max(r.len()));
    let (mut i, mut j) = (0, 0);

    while i < l.len() && j < r.len() {
        let (lt, rt) = (l[i], r[j]);
        if lt.track_number == rt.track_number {
            pairs.push(AlignedPair {
                left: Some(lt),
                right: Some(rt),
            });
            i += 1;
            j += 1;
        } else if lt.track_number < rt.track_number {
            pairs.push(AlignedPair {
                left: Some(lt),
                right: None,
            });
            i += 1;
        } else {
            pairs.push(AlignedPair {
                left: None,
                right: Some(rt),
            });
            j += 1;
        }
    }

    pairs.extend(l[i..].iter().map(|t| AlignedPair {
        left: Some(*t),
        right: None,
    }));
    pairs.extend(r[j..].iter().map(|t| AlignedPair {
        left: None,
        right: Some(*t),
    }));

    pairs
}
