use bayestree::{
    accuracy,
    information_gain,
    BayesianNetwork,
    Classifier,
    ConfusionMatrix,
    Id3,
    Node,
    NodeRecord,
    ProbabilityRecord,
    Sample,
};

use rand::prelude::*;


fn sample(rows: &[&[&str]]) -> Sample {
    let rows = rows.iter()
        .map(|row| row.iter().map(|c| c.to_string()).collect())
        .collect();
    Sample::from_rows(rows).unwrap()
}


// The class is perfectly separated by column 1 (gain = 1 bit)
// while column 2 carries no information (gain = 0),
// so the root must split on column 1.
#[test]
fn root_splits_on_the_separating_attribute() {
    let train = sample(&[
        &["Yes", "a", "x"],
        &["Yes", "a", "y"],
        &["No", "b", "x"],
        &["No", "b", "y"],
    ]);

    let f = Id3::fit(&train);
    let branch = match f.root() {
        Node::Branch(branch) => branch,
        Node::Leaf(_) => panic!("expected a branch at the root"),
    };
    assert_eq!(branch.attribute(), 1);

    let query = sample(&[&["?", "a", "x"]]);
    assert_eq!(f.label(&query, 0), "Yes");

    let query = sample(&[&["?", "b", "y"]]);
    assert_eq!(f.label(&query, 0), "No");
}


#[test]
fn unseen_attribute_value_falls_back_to_default_label() {
    let train = sample(&[
        &["Yes", "a"],
        &["Yes", "a"],
        &["No", "b"],
    ]);

    let f = Id3::fit(&train);

    // "c" was never observed during induction.
    let query = sample(&[&["?", "c"]]);
    assert_eq!(f.label(&query, 0), "Yes");
}


#[test]
fn training_rows_on_pure_paths_classify_exactly() {
    let train = sample(&[
        &["Yes", "a", "x"],
        &["Yes", "a", "y"],
        &["No", "b", "x"],
        &["No", "b", "y"],
    ]);

    let f = Id3::fit(&train);
    let predictions = f.predict_all(&train);
    assert_eq!(predictions, vec!["Yes", "Yes", "No", "No"]);
    assert_eq!(accuracy(&f, &train), Some(1.0));
}


#[test]
fn information_gain_is_never_negative() {
    let classes = ["A", "B", "C"];
    let values = ["u", "v", "w", "z"];

    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..200 {
        let n_rows = rng.gen_range(1..=20);
        let n_features = rng.gen_range(1..=3);

        let rows = (0..n_rows)
            .map(|_| {
                let mut row = Vec::with_capacity(1 + n_features);
                row.push(classes.choose(&mut rng).unwrap().to_string());
                for _ in 0..n_features {
                    row.push(values.choose(&mut rng).unwrap().to_string());
                }
                row
            })
            .collect::<Vec<_>>();
        let table = Sample::from_rows(rows).unwrap();

        let index = (0..n_rows).collect::<Vec<usize>>();
        for attribute in table.feature_columns() {
            let gain = information_gain(&table, &index[..], attribute);
            assert!(
                gain >= -1e-9,
                "negative gain {gain} at column {attribute}"
            );
        }
    }
}


#[test]
fn induction_is_deterministic_over_random_tables() {
    let classes = ["Yes", "No"];
    let values = ["a", "b", "c"];

    let mut rng = StdRng::seed_from_u64(99);

    let rows = (0..50)
        .map(|_| vec![
            classes.choose(&mut rng).unwrap().to_string(),
            values.choose(&mut rng).unwrap().to_string(),
            values.choose(&mut rng).unwrap().to_string(),
            values.choose(&mut rng).unwrap().to_string(),
        ])
        .collect::<Vec<_>>();
    let table = Sample::from_rows(rows).unwrap();

    assert_eq!(Id3::fit(&table), Id3::fit(&table));
}


#[test]
fn confusion_counts_sum_to_test_size() {
    let classes = ["Yes", "No", "Maybe"];
    let values = ["a", "b"];

    let mut rng = StdRng::seed_from_u64(7);

    let rows = (0..120)
        .map(|_| vec![
            classes.choose(&mut rng).unwrap().to_string(),
            values.choose(&mut rng).unwrap().to_string(),
            values.choose(&mut rng).unwrap().to_string(),
        ])
        .collect::<Vec<_>>();
    let table = Sample::from_rows(rows).unwrap();

    let (train, test) = table.holdout_split(0.6, &mut rng);
    let f = Id3::fit(&train);

    let counts = ConfusionMatrix::from_classifier(&f, &test, "Yes", "No");
    assert_eq!(counts.total(), test.shape().0);
}


// Full pipeline: sample a two-node network whose effect tracks its
// cause, learn the cause from the effect, and check the learner
// beats the noise floor.
#[test]
fn sampled_network_data_is_learnable() {
    let net = BayesianNetwork::from_records(vec![
        NodeRecord {
            name: "Cause".to_string(),
            parents: Vec::new(),
            probabilities: vec![ProbabilityRecord {
                parents_values: Vec::new(),
                value: 0.5,
            }],
        },
        NodeRecord {
            name: "Effect".to_string(),
            parents: vec!["Cause".to_string()],
            probabilities: vec![
                ProbabilityRecord {
                    parents_values: vec![true],
                    value: 0.95,
                },
                ProbabilityRecord {
                    parents_values: vec![false],
                    value: 0.05,
                },
            ],
        },
    ]).unwrap();

    let mut rng = StdRng::seed_from_u64(31);
    let drawn = net.draw_many(2_000, &mut rng).unwrap();

    // Column 0 (the class) is the cause; column 1 is the effect.
    let rows = drawn.into_iter()
        .map(|row| vec![row[0].to_string(), row[1].to_string()])
        .collect::<Vec<_>>();
    let table = Sample::from_rows(rows).unwrap();

    let (train, test) = table.holdout_split(0.6, &mut rng);
    let f = Id3::fit(&train);

    let acc = accuracy(&f, &test).unwrap();
    assert!(acc > 0.85, "accuracy {acc} below the expected 0.95 regime");

    let counts = ConfusionMatrix::from_classifier(&f, &test, "true", "false");
    assert_eq!(counts.total(), test.shape().0);
}
