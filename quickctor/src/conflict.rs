//! Parameter name conflict detection.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// A parameter name that occurs more than once in a constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    /// The duplicated name.
    pub name: String,
    /// Position of the first occurrence in the merged list.
    pub first: usize,
    /// Position of the last occurrence, the one reported.
    pub last: usize,
}

struct Group<'a> {
    name: &'a str,
    first: usize,
    last: usize,
}

/// Checks merged parameter names for ordinal duplicates.
///
/// Names are grouped in order of first appearance. The first group with more
/// than one entry is reported through its last occurrence.
#[must_use]
pub fn validate<'a, I>(names: I) -> Option<Conflict>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<Group<'_>> = Vec::new();
    for (position, name) in names.into_iter().enumerate() {
        match index.entry(name) {
            Entry::Occupied(slot) => {
                if let Some(group) = groups.get_mut(*slot.get()) {
                    group.last = position;
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(groups.len());
                groups.push(Group {
                    name,
                    first: position,
                    last: position,
                });
            }
        }
    }
    groups
        .into_iter()
        .find(|group| group.first != group.last)
        .map(|group| Conflict {
            name: group.name.to_owned(),
            first: group.first,
            last: group.last,
        })
}
