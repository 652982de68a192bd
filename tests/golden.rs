use pretty_assertions::assert_eq;

use uhdf5_inttests::{expected_datasets, generate, write_fixture, IntegerTypeCase};

const GOLDEN: &str = include_str!("golden/t_integer_types.cpp");

#[test]
fn matches_checked_in_program() {
    assert_eq!(generate(), GOLDEN);
}

#[test]
fn idempotent() {
    assert_eq!(generate(), generate());

    let mut streamed = String::new();
    write_fixture(&mut streamed).unwrap();
    assert_eq!(streamed, generate());
}

#[test]
fn blocks_in_dataset_order() {
    let source = generate();
    let positions: Vec<usize> = expected_datasets()
        .iter()
        .map(|dataset| {
            let call = format!("file.create_dataset<{0}>(\"{0}\", d);", dataset.name);
            let mut matches = source.match_indices(&call);
            let (position, _) = matches.next().unwrap();
            assert!(matches.next().is_none(), "{} created twice", dataset.name);
            position
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn values_agree_with_manifest() {
    let source = generate();
    for dataset in expected_datasets() {
        let case: IntegerTypeCase = dataset.name.parse().unwrap();
        let suffix = case.literal_suffix();
        let line = format!(
            "{} v[{}] = {{ {}{suffix}, {}{suffix} }};",
            dataset.name, dataset.extent, dataset.values[0], dataset.values[1],
        );
        assert!(source.contains(&line), "missing `{line}`");
    }
}
