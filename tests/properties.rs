use proptest::prelude::*;
use termstyle::{StyleSet, palette_bg, palette_fg, rgb_bg, rgb_fg};

fn style_set() -> impl Strategy<Value = StyleSet> {
    prop::collection::vec("[0-9]{1,3}(;[0-9]{1,3}){0,4}", 0..5)
        .prop_map(StyleSet::new)
}

fn out_of_range() -> impl Strategy<Value = i64> {
    prop_oneof![i64::MIN..0i64, 256i64..=i64::MAX]
}

proptest! {
    #[test]
    fn combination_is_associative(a in style_set(), b in style_set(), c in style_set()) {
        let left = (&a + &b) + &c;
        let right = &a + (&b + &c);
        prop_assert_eq!(left.codes(), right.codes());
    }

    #[test]
    fn combination_concatenates(a in style_set(), b in style_set()) {
        let combined = &a + &b;
        let expected: Vec<_> = a.codes().iter().chain(b.codes()).cloned().collect();
        prop_assert_eq!(combined.codes(), expected.as_slice());
        prop_assert_eq!(combined.len(), a.len() + b.len());
    }

    #[test]
    fn palette_prefixes(i in 0i64..=255) {
        let fg = palette_fg(i).unwrap().paint("");
        let bg = palette_bg(i).unwrap().paint("");
        let fg_prefix = format!("\x1b[38;5;{i}m");
        let bg_prefix = format!("\x1b[48;5;{i}m");
        prop_assert!(fg.starts_with(&fg_prefix));
        prop_assert!(bg.starts_with(&bg_prefix));
    }

    #[test]
    fn palette_rejects_out_of_range(i in out_of_range()) {
        prop_assert!(palette_fg(i).is_err());
        prop_assert!(palette_bg(i).is_err());
    }

    #[test]
    fn rgb_prefixes(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
        let fg = rgb_fg(r, g, b).unwrap().paint("x");
        let bg = rgb_bg(r, g, b).unwrap().paint("x");
        prop_assert_eq!(fg, format!("\x1b[38;2;{r};{g};{b}mx\x1b[0m"));
        prop_assert_eq!(bg, format!("\x1b[48;2;{r};{g};{b}mx\x1b[0m"));
    }

    #[test]
    fn rgb_rejects_any_bad_channel(
        bad in out_of_range(),
        ok in 0i64..=255,
        slot in 0usize..3,
    ) {
        let mut channels = [ok; 3];
        channels[slot] = bad;
        let [r, g, b] = channels;
        prop_assert!(rgb_fg(r, g, b).is_err());
        prop_assert!(rgb_bg(r, g, b).is_err());
    }

    #[test]
    fn apply_is_pure(style in style_set(), text in "[a-z ]{0,12}") {
        prop_assert_eq!(style.paint(&text), style.paint(&text));
    }
}
