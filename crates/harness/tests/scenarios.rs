// Copyright (C) 2026 Ryan Daum <ryan.daum@gmail.com> This program is free
// software: you can redistribute it and/or modify it under the terms of the GNU
// General Public License as published by the Free Software Foundation, version
// 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//

//! End-to-end comparisons against std containers and the bundled adapters.

use contrast_harness::{
    ColorChoice, Family, LookupPath, Measurement, Operation, ReportConfig, Stack, Suite, copy,
    find, insert, iterate,
};
use contrast_probe::{AddFn, Probe};
use pretty_assertions::assert_eq;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::ops::ControlFlow;
use test_case::test_case;

fn plain(summary_table: bool) -> ReportConfig {
    ReportConfig {
        show_full_type: false,
        color: ColorChoice::Never,
        summary_table,
    }
}

fn headings(report: &str) -> Vec<&str> {
    report
        .lines()
        .filter(|l| l.ends_with(':') && !l.starts_with("Dif"))
        .collect()
}

#[test]
fn test_constant_sequence() {
    let mut v: Vec<i32> = Vec::new();
    let m = insert(&mut v, || 5, 1000);
    assert!(m.is_measured());
    assert_eq!(v.len(), 1000);
    assert!(v.iter().all(|&x| x == 5));

    assert_eq!(iterate(&v).visited, 1000);

    // The duplicate is dropped inside `copy`; the source must come through untouched.
    assert!(copy(&v).is_measured());
    assert_eq!(v, vec![5; 1000]);

    let found = find(&v, || 5, 1000);
    assert_eq!(found.path, LookupPath::Scan);
    assert_eq!(found.hits, 1000);

    let missing = find(&v, || 6, 10);
    assert_eq!(missing.hits, 0);
    assert!(missing.measurement.is_measured());
}

/// Elements in the order the container's own walk hands them out.
fn walked<C: Probe>(container: &C) -> Vec<C::Elem>
where
    C::Elem: Clone,
{
    let mut seen = Vec::new();
    if let Some(visit) = C::BEGIN {
        visit(container, &mut |elem| {
            seen.push(elem.clone());
            ControlFlow::Continue(())
        });
    }
    seen
}

#[test]
fn test_iterate_visits_each_element_once() {
    let source: Vec<u32> = (0..500).collect();

    let sequence = source.clone();
    assert_eq!(iterate(&sequence).visited, source.len());
    assert_eq!(walked(&sequence), source);

    let deque: VecDeque<u32> = source.iter().copied().collect();
    assert_eq!(iterate(&deque).visited, source.len());
    assert_eq!(walked(&deque), source);

    let list: LinkedList<u32> = source.iter().copied().collect();
    assert_eq!(iterate(&list).visited, source.len());
    assert_eq!(walked(&list), source);

    let ordered: BTreeSet<u32> = source.iter().rev().copied().collect();
    assert_eq!(iterate(&ordered).visited, source.len());
    assert_eq!(walked(&ordered), source);

    let hashed: HashSet<u32> = source.iter().copied().collect();
    let mut seen = walked(&hashed);
    seen.sort_unstable();
    assert_eq!(iterate(&hashed).visited, source.len());
    assert_eq!(seen, source);
}

#[test]
fn test_counting_map_cycles_keys() {
    let keys = ["alpha", "beta", "gamma"];
    let mut i = 0;
    let mut counts: HashMap<String, u32> = HashMap::new();
    insert(
        &mut counts,
        || {
            let key = keys[i % keys.len()].to_string();
            i += 1;
            (key, 1)
        },
        300,
    );
    assert_eq!(counts.len(), 3);

    let mut j = 0;
    let by_key = find(
        &counts,
        || {
            let key = keys[j % keys.len()].to_string();
            j += 1;
            key
        },
        30,
    );
    assert_eq!(by_key.path, LookupPath::NativeByValue);
    assert_eq!(by_key.hits, 30);

    let by_pair = find(&counts, || ("beta".to_string(), 0), 5);
    assert_eq!(by_pair.path, LookupPath::NativeByKey);
    assert_eq!(by_pair.hits, 5);
}

#[derive(Clone, Debug, Default)]
struct Journal {
    pushed: Vec<u8>,
    appended: Vec<u8>,
}

impl Probe for Journal {
    type Value = u8;
    type Elem = u8;
    type Key = u8;

    const PUSH: Option<AddFn<Self>> = Some(|j, value| j.pushed.push(value));
    const PUSH_BACK: Option<AddFn<Self>> = Some(|j, value| j.appended.push(value));
}

#[test]
fn test_push_wins_over_push_back() {
    let mut journal = Journal::default();
    insert(&mut journal, || 7, 4);
    assert_eq!(journal.pushed, vec![7, 7, 7, 7]);
    assert!(journal.appended.is_empty());
}

#[test_case(LookupPath::Scan ; "scan")]
#[test_case(LookupPath::NativeByValue ; "native")]
fn test_lookup_paths_agree(expected: LookupPath) {
    let values = [3u64, 9, 27, 81];
    let mut i = 0;
    let mut next = || {
        let v = values[i % values.len()];
        i += 1;
        v
    };

    let lookup = match expected {
        LookupPath::Scan => {
            let mut v: Vec<u64> = Vec::new();
            insert(&mut v, &mut next, 4);
            find(&v, || 27u64, 8)
        }
        _ => {
            let mut s: HashSet<u64> = HashSet::new();
            insert(&mut s, &mut next, 4);
            find(&s, || 27u64, 8)
        }
    };
    assert_eq!(lookup.path, expected);
    assert_eq!(lookup.hits, 8);
}

#[test]
fn test_compare_sequence_with_stack() {
    let mut v: Vec<i32> = Vec::new();
    let mut stack: Stack<i32> = Stack::new();
    let suite = Suite::new(10).with_config(plain(false));

    let mut out = Vec::new();
    let comparison = suite
        .compare_all(&mut out, &mut v, || 1, &mut stack, || 2)
        .unwrap();
    let report = String::from_utf8(out).unwrap();

    assert_eq!(
        headings(&report),
        vec![
            "Inserting 10 elements:",
            "Iterating over all elements:",
            "Copying containers:",
            "Finding 10 elements:",
            "Moving containers:",
        ]
    );
    assert_eq!(report.matches("No begin() member found").count(), 1);
    assert_eq!(
        report
            .matches("No find() member found, using a linear scan")
            .count(),
        1
    );
    assert_eq!(report.matches("Dif: n/a").count(), 2);
    assert_eq!(report.matches("---------------------").count(), 5);
    assert!(!report.contains("not comparable"));

    let order: Vec<Operation> = comparison.rows.iter().map(|r| r.operation).collect();
    assert_eq!(order, Operation::ORDER.to_vec());
    assert_eq!(comparison.families, [Family::SequenceLike, Family::PushOnlyLike]);
    assert_eq!(
        comparison.lookup_paths,
        [LookupPath::Scan, LookupPath::Unsupported]
    );
    let iterated = comparison.row(Operation::Iterate).unwrap();
    assert!(iterated.first.is_measured());
    assert_eq!(iterated.second, Measurement::NotApplicable);
    assert_eq!(iterated.difference, None);
    assert!(comparison.row(Operation::Move).unwrap().difference.is_some());

    // Both containers were moved from.
    assert!(v.is_empty());
    assert!(stack.is_empty());

    let json = serde_json::to_value(&comparison).unwrap();
    assert_eq!(json["labels"][0], "Container 1");
    assert_eq!(json["lookup_paths"][0], "scan");
    assert_eq!(json["rows"][1]["operation"], "iterate");
    assert!(json["rows"][1]["second"].is_null());
    assert!(json["rows"][1]["first"].is_number());
}

#[test]
fn test_compare_flags_scan_against_native() {
    let mut v: Vec<u32> = Vec::new();
    let mut s: HashSet<u32> = HashSet::new();
    let mut n = 0u32;
    let mut m = 0u32;
    let suite = Suite::new(20).with_config(plain(false));

    let mut out = Vec::new();
    let comparison = suite
        .compare_all(
            &mut out,
            &mut v,
            || {
                n += 1;
                n
            },
            &mut s,
            || {
                m += 1;
                m
            },
        )
        .unwrap();
    let report = String::from_utf8(out).unwrap();

    assert!(!comparison.lookups_comparable());
    assert_eq!(
        comparison.lookup_paths,
        [LookupPath::Scan, LookupPath::NativeByValue]
    );
    assert!(report.contains("Lookup times are not comparable: one side is a linear scan"));
    assert!(!report.contains("No begin() member found"));
}

#[test]
fn test_compare_with_separate_lookups_and_summary() {
    let mut ordered: BTreeMap<u32, u32> = BTreeMap::new();
    let mut hashed: HashMap<u32, u32> = HashMap::new();
    let mut a = 0u32;
    let mut b = 0u32;
    let suite = Suite::new(50).with_config(ReportConfig {
        show_full_type: true,
        ..plain(true)
    });

    let mut out = Vec::new();
    let comparison = suite
        .compare_all_with_lookups(
            &mut out,
            &mut ordered,
            || {
                a += 1;
                (a, a * 2)
            },
            || 7u32,
            &mut hashed,
            || {
                b += 1;
                (b, b * 2)
            },
            || 7u32,
        )
        .unwrap();
    let report = String::from_utf8(out).unwrap();

    assert!(comparison.lookups_comparable());
    assert_eq!(
        comparison.lookup_paths,
        [LookupPath::NativeByValue, LookupPath::NativeByValue]
    );
    assert!(comparison.labels[0].contains("BTreeMap"));
    assert!(comparison.labels[1].contains("HashMap"));
    assert!(report.contains("┌"));
    assert!(report.contains("│ insert "));
    assert!(report.contains("│ move "));
    assert!(!report.contains("Container 1"));
}
