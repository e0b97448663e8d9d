//! Integration tests for triad-core
//!
//! These tests exercise the public API end to end: construction, structured
//! access, dissection, assembly and serialization.

use anyhow::Result;
use triad_core::prelude::*;
use triad_core::{codec, Digits};

#[test]
fn test_middle_group_dissection_scenario() -> Result<()> {
    let mat = Mat::<i64>::iota(GroupSizes::new(1, 1, 1), 3)?;
    assert_eq!(mat.as_slice(), (0..27).collect::<Vec<i64>>().as_slice());

    let sections = mat.dissect(Group::Scott)?;
    assert_eq!(sections.len(), 3);

    for (k, section) in sections.iter().enumerate() {
        assert_eq!(section.len(), 9);
        let offsets: Vec<usize> = (0..3)
            .flat_map(|f| (0..3).map(move |c| f * 9 + k * 3 + c))
            .collect();
        for (i, &offset) in offsets.iter().enumerate() {
            assert_eq!(section[i], mat[offset]);
        }
    }

    let back = Mat::assemble(&sections, Group::Scott)?;
    assert_eq!(back.as_slice(), mat.as_slice());
    assert_eq!(back.sizes(), mat.sizes());
    Ok(())
}

#[test]
fn test_structured_write_is_visible_in_sections() -> Result<()> {
    let mut mat = Mat::<f64>::zeros(GroupSizes::new(2, 1, 1), 2)?;
    mat.write(&[1, 0], &[1], &[0], 3.5)?;

    let sections = mat.dissect(Group::Free)?;
    // free index [1, 0] has ordinal 2
    assert_eq!(sections[2].read(&[], &[1], &[0])?, 3.5);
    for (ordinal, section) in sections.iter().enumerate() {
        if ordinal != 2 {
            assert!(section.as_slice().iter().all(|&x| x == 0.0));
        }
    }
    Ok(())
}

#[test]
fn test_round_trip_for_every_group_and_radix() -> Result<()> {
    for radix in 2..=4 {
        let mat = Mat::<i64>::iota(GroupSizes::new(1, 2, 1), radix)?;
        for group in Group::ALL {
            let sections = mat.dissect(group)?;
            assert_eq!(Mat::assemble(&sections, group)?, mat);
        }
    }
    Ok(())
}

#[test]
fn test_sections_are_independent_buffers() -> Result<()> {
    let mat = Mat::<i32>::iota(GroupSizes::new(1, 0, 1), 2)?;
    let mut sections = mat.dissect(Group::Caly)?;
    sections[0].write_flat(0, -1)?;
    assert_eq!(mat.read_flat(0)?, 0);
    assert_eq!(sections[1].read_flat(0)?, 1);
    Ok(())
}

#[test]
fn test_odometer_enumeration_visits_every_offset() -> Result<()> {
    let sizes = GroupSizes::new(1, 1, 2);
    let radix = 3;
    let mat = Mat::<usize>::from_fn(sizes, radix, |offset| offset)?;

    let mut visited = vec![false; mat.len()];
    for digits in codec::index_sequence(sizes.total(), radix)? {
        let (f, rest) = digits.split_at(sizes.free);
        let (s, c) = rest.split_at(sizes.scott);
        let offset = *mat.get(f, s, c)?;
        assert_eq!(offset, codec::ordinal_of(&digits, radix)?);
        assert!(!visited[offset]);
        visited[offset] = true;
    }
    assert!(visited.into_iter().all(|v| v));
    Ok(())
}

#[test]
fn test_errors_surface_at_access_site() {
    let mut mat = Mat::<u8>::zeros(GroupSizes::new(1, 1, 0), 2).unwrap();

    let err = mat.read(&[0], &[2], &[]).unwrap_err();
    assert!(matches!(err, TriadError::IndexOutOfDomain { index: 2, bound: 2, .. }));

    let err = mat.write_flat(4, 1).unwrap_err();
    assert_eq!(err.to_string(), "get_flat_mut: index 4 out of domain [0, 4)");

    assert!(mat.as_slice().iter().all(|&x| x == 0));
}

#[test]
fn test_partial_read_differs_from_slice_origin() -> Result<()> {
    let mat = Mat::<i64>::iota(GroupSizes::new(1, 1, 1), 3)?;
    assert_eq!(mat.read(&[2], &[], &[])?, 2);
    assert_eq!(mat.read(&[1], &[], &[2])?, 5);

    // the same partial index as a slice starts at the padded origin
    let slice = mat.select(&StructuredIndex::new(&[2], &[], &[]))?;
    assert_eq!(slice.as_slice()[0], 18);
    let slice = mat.select(&StructuredIndex::new(&[1], &[], &[2]))?;
    assert_eq!(slice.as_slice(), &[11, 14, 17]);
    Ok(())
}

#[test]
fn test_odometer_resume_from_clone() {
    let start: Digits = codec::digits_of(4, 3, 2).unwrap();
    let odo = Odometer::from_ordinal(4, 3, 2).unwrap();
    assert_eq!(odo.digits(), &start[..]);

    let next = odo.successor().unwrap();
    assert_eq!(next.digits(), &[1, 0, 1]);
    assert_eq!(odo.digits(), &[1, 0, 0]);
}

#[test]
fn test_display_header_and_body() -> Result<()> {
    let mat = Mat::<i32>::iota(GroupSizes::new(1, 0, 0), 3)?;
    let rendered = mat.to_string();
    let mut lines = rendered.lines();
    assert_eq!(lines.next(), Some("Mat[free=1, scott=0, caly=0], N=3"));
    assert_eq!(lines.next(), Some("[0, 1, 2]"));
    Ok(())
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_round_trip_revalidates() -> Result<()> {
    let mat = Mat::<f64>::iota(GroupSizes::new(1, 1, 0), 2)?;
    let json = serde_json::to_string(&mat)?;
    let back: Mat<f64> = serde_json::from_str(&json)?;
    assert_eq!(back, mat);

    let broken = r#"{"data":[0.0,1.0,2.0],"sizes":{"free":1,"scott":1,"caly":0},"radix":2}"#;
    assert!(serde_json::from_str::<Mat<f64>>(broken).is_err());
    Ok(())
}
