/// Property tests for the line-content invariant over random configurations.
use linegen::{GenerateConfig, Vocabulary, write_lines};
use proptest::prelude::*;

fn prop_config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

fn arb_vocab() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z0-9]{1,8}", 1..12)
}

fn render(words: &[String], config: &GenerateConfig) -> (Vec<u8>, Vec<u64>) {
    let vocab = Vocabulary::new(words.iter().cloned()).unwrap();
    let mut buf = Vec::new();
    let mut seen = Vec::new();
    write_lines(&mut buf, &vocab, config, &mut |i| seen.push(i)).unwrap();
    (buf, seen)
}

proptest! {
    #![proptest_config(prop_config())]

    /// Line i is words_per_line copies of vocab[i % len] and nothing else.
    #[test]
    fn every_line_matches_its_slot(
        words in arb_vocab(),
        line_count in 0u64..400,
        words_per_line in 1usize..16,
    ) {
        let config = GenerateConfig { line_count, words_per_line, progress_interval: 1000 };
        let (buf, _) = render(&words, &config);
        let text = String::from_utf8(buf).unwrap();

        if line_count == 0 {
            prop_assert!(text.is_empty());
        } else {
            prop_assert!(text.ends_with('\n'));
            prop_assert!(!text.ends_with("\n\n"));
        }

        let lines: Vec<&str> = text.split_terminator('\n').collect();
        prop_assert_eq!(lines.len() as u64, line_count);
        for (n, line) in lines.iter().enumerate() {
            let i = n + 1;
            let word = &words[i % words.len()];
            let expected = vec![word.as_str(); words_per_line].join(" ");
            prop_assert_eq!(*line, expected.as_str(), "line {}", i);
        }
    }

    /// Progress fires exactly at the multiples of the interval.
    #[test]
    fn progress_at_every_multiple(
        line_count in 0u64..5000,
        interval in 1u64..1500,
    ) {
        let config = GenerateConfig { line_count, words_per_line: 1, progress_interval: interval };
        let (_, seen) = render(&["w".to_string()], &config);
        let expected: Vec<u64> = (1..=line_count / interval).map(|k| k * interval).collect();
        prop_assert_eq!(seen, expected);
    }

    /// Identical parameters give identical bytes.
    #[test]
    fn deterministic(
        words in arb_vocab(),
        line_count in 0u64..200,
        words_per_line in 1usize..8,
    ) {
        let config = GenerateConfig { line_count, words_per_line, progress_interval: 7 };
        prop_assert_eq!(render(&words, &config), render(&words, &config));
    }
}
