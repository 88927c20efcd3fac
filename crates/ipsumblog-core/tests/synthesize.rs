use ipsumblog_core::{
    seed_from, sha1_hex, Block, GenError, Layout, ParagraphBounds, Profile, SeedExtractor,
    Synthesizer,
};

const FOOBAR0: &str = "1f308392240ef628c4a23f2a60b5886d006adf14";

#[test]
fn foobar0_digest_is_stable() {
    assert_eq!(sha1_hex("foobar0"), FOOBAR0);
}

#[test]
fn foobar0_has_count_window_plus_one_blocks() {
    let digest = sha1_hex("foobar0");
    let entry = Synthesizer::default().synthesize(&digest).unwrap();

    let (count_seed, _) = seed_from(&digest, 7, 2).unwrap();
    assert_eq!(count_seed, 0x22);
    assert_eq!(entry.blocks.len(), count_seed as usize + 1);
    assert!(entry.title.split_whitespace().count() <= 5);
    assert!(!entry.title.is_empty());
    assert_eq!(entry.name, digest);
}

#[test]
fn foobar0_reference_content() {
    let entry = Synthesizer::default().synthesize(FOOBAR0).unwrap();
    assert_eq!(entry.title, "Enim laborum minim id velit.");
    assert_eq!(entry.blocks.len(), 35);
    assert_eq!(entry.blocks.iter().filter(|b| b.is_heading()).count(), 7);
}

#[test]
fn foobar0_date_comes_from_window_nine() {
    let entry = Synthesizer::default().synthesize(FOOBAR0).unwrap();
    assert_eq!(entry.date_string().as_deref(), Some("2002-02-27T01:43:04.000Z"));
}

#[test]
fn headings_follow_seed_modulus() {
    let mut seeds = SeedExtractor::new(FOOBAR0);
    let entry = Synthesizer::default().synthesize(FOOBAR0).unwrap();

    for (i, block) in entry.blocks.iter().enumerate() {
        let seed = seeds.seed(9 + i, 7).unwrap();
        match block {
            Block::Heading(text) => {
                assert_eq!(seed % 7, 0);
                assert!(text.split_whitespace().count() <= 5);
            }
            Block::Paragraph(_) => assert_ne!(seed % 7, 0),
        }
    }
}

#[test]
fn synthesis_is_deterministic() {
    let synth = Synthesizer::default();
    for salt in ["foobar1", "foobar2", "hello"] {
        let digest = sha1_hex(salt);
        let a = synth.synthesize(&digest).unwrap();
        let b = synth.synthesize(&digest).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.render(), b.render());
    }
}

#[test]
fn front_matter_layout() {
    let text = Synthesizer::default().synthesize(FOOBAR0).unwrap().render();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "---");
    assert!(lines[1].starts_with("title: "));
    assert_eq!(lines[2], "date: 2002-02-27T01:43:04.000Z");
    assert_eq!(lines[3], "---");
    assert!(text.ends_with('\n'));
    assert!(!text.ends_with("\n\n"));
}

#[test]
fn undated_heading_layout() {
    let profile = Profile {
        include_date: false,
        layout: Layout::Heading,
        ..Profile::default()
    };
    let entry = Synthesizer::new(profile, ParagraphBounds::default())
        .synthesize(FOOBAR0)
        .unwrap();
    assert!(entry.date.is_none());

    let text = entry.render();
    assert!(text.starts_with(&format!("# {}\n\n", entry.title)));
    assert!(!text.contains("date:"));
}

#[test]
fn date_toggle_does_not_change_body() {
    let dated = Synthesizer::default().synthesize(FOOBAR0).unwrap();
    let profile = Profile {
        include_date: false,
        ..Profile::default()
    };
    let undated = Synthesizer::new(profile, ParagraphBounds::default())
        .synthesize(FOOBAR0)
        .unwrap();
    assert_eq!(dated.title, undated.title);
    assert_eq!(dated.blocks, undated.blocks);
}

#[test]
fn non_extending_profile_rejects_long_windows() {
    let profile = Profile {
        extend_digest_on_overflow: false,
        ..Profile::default()
    };
    let err = Synthesizer::new(profile, ParagraphBounds::default())
        .synthesize(FOOBAR0)
        .unwrap_err();
    assert!(matches!(
        err,
        GenError::SeedWindowOutOfRange { available: 40, .. }
    ));
}

#[test]
fn rejects_malformed_digest() {
    let synth = Synthesizer::default();
    assert!(matches!(
        synth.synthesize("abc"),
        Err(GenError::InvalidDigest(_))
    ));
    assert!(matches!(
        synth.synthesize(&format!("{FOOBAR0}00")),
        Err(GenError::InvalidDigest(_))
    ));
    assert!(matches!(
        synth.synthesize(&FOOBAR0.to_uppercase()),
        Err(GenError::InvalidDigest(_))
    ));
}
