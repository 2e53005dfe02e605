//! Genome contract compliance test helpers.
//!
//! These functions verify that a [`Genome`] implementation satisfies the
//! observable contract. Reused by every representation's test module
//! (ArrayGenome, LinkedGenome, and both through AnyGenome dispatch), so
//! the representations are held to exactly the same behavior.

use transposon_core::{Genome, GenomeError, Interval, Marker, TeId, TeState};

/// Assert the structural invariants that must hold after every operation.
pub fn assert_consistent(g: &dyn Genome) {
    let rendered = g.render();
    assert_eq!(
        rendered.chars().count(),
        g.len(),
        "render length != len() for {rendered:?}"
    );
    assert!(
        rendered.chars().all(|c| Marker::from_symbol(c).is_some()),
        "render {rendered:?} leaves the marker alphabet"
    );
    assert_eq!(g.markers().len(), g.len());

    let markers = g.markers();
    let mut intervals: Vec<Interval> = Vec::new();
    for id in g.active_tes() {
        assert_eq!(g.te_state(id), Some(TeState::Active), "TE {id}");
        let iv = g
            .te_interval(id)
            .unwrap_or_else(|| panic!("active TE {id} has no interval"));
        assert!(!iv.is_empty(), "TE {id} has empty interval {iv}");
        assert!(iv.end <= g.len(), "TE {id} interval {iv} past len {}", g.len());
        assert!(
            markers[iv.start..iv.end]
                .iter()
                .all(|m| *m == Marker::Active),
            "TE {id} interval {iv} not all active in {rendered:?}"
        );
        intervals.push(iv);
    }
    intervals.sort_by_key(|iv| iv.start);
    for pair in intervals.windows(2) {
        assert!(
            pair[0].end <= pair[1].start,
            "active intervals overlap: {} and {}",
            pair[0],
            pair[1]
        );
    }

    let ids = g.active_tes();
    assert!(
        ids.windows(2).all(|w| w[0] < w[1]),
        "active_tes not ascending: {ids:?}"
    );
}

/// `construct(n)` has length `n`, renders as `n` dashes, and has no TEs.
pub fn assert_construct_empty<G: Genome>(make: &impl Fn(usize) -> G) {
    for n in [0, 1, 5, 17] {
        let g = make(n);
        assert_eq!(g.len(), n);
        assert_eq!(g.is_empty(), n == 0);
        assert_eq!(g.render(), "-".repeat(n));
        assert!(g.active_tes().is_empty());
        assert_eq!(g.te_state(TeId::FIRST), None);
    }
}

/// Insertion grows the genome, registers an active TE, and renders `'A'`.
pub fn assert_insert_grows_and_registers<G: Genome>(make: &impl Fn(usize) -> G) {
    let mut g = make(10);
    let id1 = g.insert_te(3, 2).unwrap();
    assert_eq!(id1, TeId::FIRST);
    assert_eq!(g.render(), "---AA-------");
    assert_eq!(g.len(), 12);
    assert_eq!(g.active_tes(), vec![id1]);
    assert_eq!(g.te_interval(id1), Some(Interval::new(3, 5)));
    assert_consistent(&g);
}

/// An insertion strictly inside an active TE disables it and splits its
/// footprint around the new element.
pub fn assert_collision_disables<G: Genome>(make: &impl Fn(usize) -> G) {
    let mut g = make(10);
    let id1 = g.insert_te(3, 2).unwrap();
    let id2 = g.insert_te(4, 1).unwrap();
    assert_eq!(g.render(), "---xAx-------");
    assert_eq!(g.len(), 13);
    assert_eq!(g.active_tes(), vec![id2]);
    assert_eq!(g.te_state(id1), Some(TeState::Disabled));
    assert_eq!(g.te_interval(id1), None);
    assert_eq!(g.te_interval(id2), Some(Interval::new(4, 5)));
    assert_consistent(&g);
}

/// Inserting at a TE's first position collides; at one past its last
/// position does not.
pub fn assert_collision_is_half_open<G: Genome>(make: &impl Fn(usize) -> G) {
    let mut g = make(10);
    let a = g.insert_te(3, 2).unwrap();
    let b = g.insert_te(3, 1).unwrap();
    assert_eq!(g.render(), "---Axx-------");
    assert_eq!(g.active_tes(), vec![b]);
    assert_eq!(g.te_state(a), Some(TeState::Disabled));

    let mut g = make(10);
    let a = g.insert_te(3, 2).unwrap();
    let b = g.insert_te(5, 1).unwrap();
    assert_eq!(g.render(), "---AAA-------");
    assert_eq!(g.active_tes(), vec![a, b]);
    assert_eq!(g.te_interval(a), Some(Interval::new(3, 5)));
    assert_eq!(g.te_interval(b), Some(Interval::new(5, 6)));
    assert_consistent(&g);
}

/// TEs downstream of an insertion move with their footprint.
pub fn assert_downstream_shift<G: Genome>(make: &impl Fn(usize) -> G) {
    let mut g = make(10);
    let a = g.insert_te(6, 2).unwrap();
    let b = g.insert_te(2, 3).unwrap();
    assert_eq!(g.render(), "--AAA----AA----");
    assert_eq!(g.te_interval(a), Some(Interval::new(9, 11)));
    assert_eq!(g.te_interval(b), Some(Interval::new(2, 5)));
    assert_consistent(&g);
}

/// Positions outside `[0, len)` wrap instead of failing.
pub fn assert_position_wraps<G: Genome>(make: &impl Fn(usize) -> G) {
    let mut g = make(10);
    let a = g.insert_te(13, 1).unwrap();
    assert_eq!(g.te_interval(a), Some(Interval::new(3, 4)));
    let b = g.insert_te(-1, 1).unwrap();
    assert_eq!(g.te_interval(b), Some(Interval::new(10, 11)));
    assert_eq!(g.render(), "---A------A-");
    assert_consistent(&g);
}

/// Copying an unknown or disabled TE is a no-op returning `None`.
pub fn assert_copy_inactive_is_noop<G: Genome>(make: &impl Fn(usize) -> G) {
    let mut g = make(10);
    let a = g.insert_te(1, 2).unwrap();
    let b = g.insert_te(6, 2).unwrap();
    g.disable_te(a);

    let render = g.render();
    let len = g.len();
    let active = g.active_tes();
    for te in [a, TeId(0), TeId(99)] {
        assert_eq!(g.copy_te(te, 3), None, "copy of {te}");
        assert_eq!(g.render(), render);
        assert_eq!(g.len(), len);
        assert_eq!(g.active_tes(), active);
    }
    assert_eq!(active, vec![b]);
}

/// `copy_te(id, off)` is `insert_te((start + off) mod len, end - start)`.
pub fn assert_copy_matches_insert<G: Genome>(make: &impl Fn(usize) -> G) {
    for offset in [3i64, -2, 7, -13, 25, 0, -1] {
        let mut copied = make(10);
        let mut inserted = make(10);
        for g in [&mut copied, &mut inserted] {
            g.insert_te(2, 3).unwrap();
            g.insert_te(10, 1).unwrap();
        }
        let src = TeId::FIRST;
        let iv = inserted.te_interval(src).unwrap();
        let len = inserted.len() as i64;
        let pos = (iv.start as i64 + offset).rem_euclid(len);

        let via_copy = copied.copy_te(src, offset);
        let via_insert = inserted.insert_te(pos, iv.len()).unwrap();

        assert_eq!(via_copy, Some(via_insert), "offset {offset}");
        assert_eq!(copied.render(), inserted.render(), "offset {offset}");
        assert_eq!(copied.active_tes(), inserted.active_tes(), "offset {offset}");
        assert_eq!(
            copied.te_interval(via_insert),
            inserted.te_interval(via_insert),
            "offset {offset}"
        );
        assert_consistent(&copied);
    }
}

/// A negative offset wraps backward past index 0 to
/// `(len + start + offset) mod len`.
pub fn assert_copy_wraps_backward<G: Genome>(make: &impl Fn(usize) -> G) {
    let mut g = make(5);
    let id1 = g.insert_te(0, 5).unwrap();
    assert_eq!(g.render(), "AAAAA-----");
    // (10 + 0 - 2) mod 10 = 8
    let id2 = g.copy_te(id1, -2).unwrap();
    assert_eq!(g.te_interval(id2), Some(Interval::new(8, 13)));
    assert_eq!(g.te_interval(id1), Some(Interval::new(0, 5)));
    assert_eq!(g.render(), "AAAAA---AAAAA--");
    assert_eq!(g.len(), 15);
    assert_eq!(g.active_tes(), vec![id1, id2]);
    assert_consistent(&g);
}

/// Disabling twice has the same effect as disabling once; unknown IDs
/// are ignored.
pub fn assert_disable_idempotent<G: Genome>(make: &impl Fn(usize) -> G) {
    let mut g = make(10);
    let a = g.insert_te(2, 3).unwrap();
    let b = g.insert_te(8, 1).unwrap();
    g.disable_te(a);
    let once = (g.render(), g.active_tes(), g.len());
    assert_eq!(once.0, "--xxx---A-----");
    g.disable_te(a);
    g.disable_te(TeId(0));
    g.disable_te(TeId(42));
    assert_eq!((g.render(), g.active_tes(), g.len()), once);
    assert_eq!(g.active_tes(), vec![b]);
    assert_eq!(g.te_state(a), Some(TeState::Disabled));
    assert_eq!(g.te_state(TeId(42)), None);
    assert_consistent(&g);
}

/// Zero-length insertions are rejected and leave the genome untouched.
pub fn assert_zero_length_rejected<G: Genome>(make: &impl Fn(usize) -> G) {
    let mut g = make(4);
    let a = g.insert_te(1, 1).unwrap();
    assert_eq!(g.insert_te(1, 0), Err(GenomeError::ZeroLengthElement));
    assert_eq!(g.render(), "-A---");
    assert_eq!(g.active_tes(), vec![a]);
    assert_eq!(g.te_state(a.successor()), None);
}

/// An insertion too large for any backing store is refused and leaves
/// the genome untouched.
pub fn assert_oversized_insert_rejected<G: Genome>(make: &impl Fn(usize) -> G) {
    let mut g = make(10);
    let a = g.insert_te(2, 3).unwrap();
    let before = (g.render(), g.active_tes(), g.te_interval(a));
    let huge = usize::MAX - g.len();
    assert!(matches!(
        g.insert_te(0, huge),
        Err(GenomeError::StorageExhausted { .. })
    ));
    assert!(matches!(
        g.insert_te(3, huge),
        Err(GenomeError::StorageExhausted { .. })
    ));
    assert_eq!((g.render(), g.active_tes(), g.te_interval(a)), before);
    assert_eq!(g.te_state(a), Some(TeState::Active));
    assert_eq!(g.te_state(a.successor()), None);

    // A later insertion still gets the next ID.
    let b = g.insert_te(0, 1).unwrap();
    assert_eq!(b, a.successor());
    assert_consistent(&g);
}

/// A zero-length genome accepts insertions at any position without
/// dividing by zero.
pub fn assert_empty_genome_guarded<G: Genome>(make: &impl Fn(usize) -> G) {
    let mut g = make(0);
    g.disable_te(TeId(1));
    assert_eq!(g.copy_te(TeId(1), -3), None);
    let a = g.insert_te(5, 3).unwrap();
    assert_eq!(g.render(), "AAA");
    assert_eq!(g.te_interval(a), Some(Interval::new(0, 3)));
    // (0 - 7) mod 3 = 2, inside `a`.
    let b = g.copy_te(a, -7).unwrap();
    assert_eq!(g.render(), "xxAAAx");
    assert_eq!(g.active_tes(), vec![b]);
    assert_consistent(&g);
}

/// A fixed pseudo-random operation stream keeps every invariant.
pub fn assert_random_walk_consistent<G: Genome>(make: &impl Fn(usize) -> G) {
    let mut g = make(16);
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };
    for step in 0..300 {
        let r = next();
        let active = g.active_tes();
        match r % 3 {
            0 => {
                let pos = (next() % 64) as i64 - 32;
                let length = (next() % 4 + 1) as usize;
                let before = g.len();
                let id = g.insert_te(pos, length).unwrap();
                assert_eq!(g.len(), before + length, "step {step}");
                assert!(g.active_tes().contains(&id), "step {step}");
            }
            1 if !active.is_empty() => {
                let te = active[(next() % active.len() as u64) as usize];
                let offset = (next() % 80) as i64 - 40;
                assert!(g.copy_te(te, offset).is_some(), "step {step}");
            }
            2 if !active.is_empty() => {
                let te = active[(next() % active.len() as u64) as usize];
                g.disable_te(te);
                assert_eq!(g.te_state(te), Some(TeState::Disabled));
            }
            _ => {}
        }
        assert_consistent(&g);
    }
}

/// Run every compliance check against a genome constructor.
pub fn run_full_compliance<G: Genome>(make: impl Fn(usize) -> G) {
    assert_construct_empty(&make);
    assert_insert_grows_and_registers(&make);
    assert_collision_disables(&make);
    assert_collision_is_half_open(&make);
    assert_downstream_shift(&make);
    assert_position_wraps(&make);
    assert_copy_inactive_is_noop(&make);
    assert_copy_matches_insert(&make);
    assert_copy_wraps_backward(&make);
    assert_disable_idempotent(&make);
    assert_zero_length_rejected(&make);
    assert_oversized_insert_rejected(&make);
    assert_empty_genome_guarded(&make);
    assert_random_walk_consistent(&make);
}
