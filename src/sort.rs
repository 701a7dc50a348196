use crate::entry::Entry;

/// First-entry-pivot quicksort over a run of entries.
///
/// This reproduces the exact permutation of partitioning a singly linked
/// list: the remainder splits order-preservingly into names strictly below
/// the pivot and everything else (equal names land in the second half),
/// each half sorts recursively, and the result splices
/// `sorted(smaller) + pivot + sorted(larger)`.
///
/// Worst case is O(n^2) on already-sorted or reverse-sorted input, which
/// is fine at directory sizes. Equal-name placement across partition
/// boundaries is observable, so the partition rule must not change.
pub fn quicksort(entries: Vec<Entry>) -> Vec<Entry> {
    if entries.len() < 2 {
        return entries;
    }

    let mut rest = entries;
    let pivot = rest.remove(0);
    let (smaller, larger): (Vec<Entry>, Vec<Entry>) =
        rest.into_iter().partition(|e| e.name < pivot.name);

    let mut out = quicksort(smaller);
    out.push(pivot);
    out.extend(quicksort(larger));
    out
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::entry::Kind;

    fn files(names: &[&str]) -> Vec<Entry> {
        names.iter().map(|n| Entry::new(n, Kind::File)).collect()
    }

    fn names(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn empty_and_single() {
        assert_eq!(quicksort(vec![]), vec![]);
        assert_eq!(names(&quicksort(files(&["only"]))), vec!["only"]);
    }

    #[test]
    fn sorts_ascending() {
        let sorted = quicksort(files(&["b.txt", "a.txt", "d.txt", "c.txt"]));
        assert_eq!(names(&sorted), vec!["a.txt", "b.txt", "c.txt", "d.txt"]);
    }

    #[test]
    fn already_sorted_stays_sorted() {
        let sorted = quicksort(files(&["a", "b", "c"]));
        assert_eq!(names(&sorted), vec!["a", "b", "c"]);
    }

    #[test]
    fn reverse_sorted() {
        let sorted = quicksort(files(&["z", "y", "x", "w"]));
        assert_eq!(names(&sorted), vec!["w", "x", "y", "z"]);
    }

    #[test]
    fn multiset_preserved() {
        let input = files(&["b", "a", "b", "a", "c"]);
        let mut expected: Vec<String> = input.iter().map(|e| e.name.clone()).collect();
        expected.sort();

        let sorted = quicksort(input);
        let got: Vec<String> = sorted.iter().map(|e| e.name.clone()).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn equal_names_keep_their_kinds() {
        // Duplicate names never land in one directory through normal
        // inserts, but the sort itself must not lose or reorder payloads
        // beyond its fixed partition rule.
        let input = vec![
            Entry::new("dup", Kind::File),
            Entry::new("aaa", Kind::File),
            Entry::new("dup", Kind::Directory),
        ];
        let sorted = quicksort(input);
        assert_eq!(names(&sorted), vec!["aaa", "dup", "dup"]);
        assert_eq!(sorted[1].kind, Kind::File);
        assert_eq!(sorted[2].kind, Kind::Directory);
    }
}
