#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use crate::parse::{check_alpha, parse_hsl, parse_hsv, parse_rgba};
    use crate::*;

    fn max_diff(a: Rgba, b: Rgba) -> u8 {
        a.rgb()
            .iter()
            .zip(b.rgb().iter())
            .map(|(x, y)| x.abs_diff(*y))
            .max()
            .unwrap_or(0)
    }

    #[test]
    fn test_hex_reference_color() {
        let rgba = hex_to_rgba("#3da6fb").unwrap();
        assert_eq!(rgba, Rgba::new(61, 166, 251, 1.0));
        assert_eq!(rgba_to_hsv(rgba), Hsv::new(207, 76, 98));
        assert_eq!(rgba_to_hsl(rgba), Hsl::new(207, 96, 61));
    }

    #[test]
    fn test_hex_accepts_short_and_bare_forms() {
        assert_eq!(hex_to_rgba("fff").unwrap(), Rgba::opaque(255, 255, 255));
        assert_eq!(hex_to_rgba("#0a3").unwrap(), Rgba::opaque(0, 170, 51));
        assert_eq!(hex_to_rgba("  3DA6FB ").unwrap(), Rgba::opaque(61, 166, 251));
        assert_eq!(Hex::parse("#ABC").unwrap().to_string(), "#aabbcc");
    }

    #[test]
    fn test_hex_rejects_malformed_input() {
        for bad in ["", "#", "#12", "#1234", "#12345g", "zzzzzz", "##123456", "#1234567"] {
            let err = hex_to_rgba(bad).unwrap_err();
            assert_eq!(err.channel(), Channel::Hex, "{bad:?}");
            assert!(!err.is_range());
        }
    }

    #[test]
    fn test_hex_round_trip_is_exact() {
        for r in (0..=255u8).step_by(5) {
            for g in (0..=255u8).step_by(17) {
                for b in (0..=255u8).step_by(3) {
                    let hex = Hex::from_rgb(r, g, b).to_string();
                    assert_eq!(rgba_to_hex(hex_to_rgba(&hex).unwrap()).to_string(), hex);
                }
            }
        }
    }

    #[test]
    fn test_rgba_to_hex_drops_alpha_and_pads() {
        assert_eq!(rgba_to_hex(Rgba::new(1, 2, 3, 0.25)).to_string(), "#010203");
    }

    #[test]
    fn test_achromatic_hue_is_zero() {
        for v in [0u8, 1, 77, 128, 254, 255] {
            let rgba = Rgba::opaque(v, v, v);
            assert_eq!(rgba_to_hsv(rgba).h, 0);
            assert_eq!(rgba_to_hsv(rgba).s, 0);
            let hsl = rgba_to_hsl(rgba);
            assert_eq!((hsl.h, hsl.s), (0, 0));
        }
    }

    #[test]
    fn test_primaries() {
        assert_eq!(rgba_to_hsv(Rgba::opaque(255, 0, 0)), Hsv::new(0, 100, 100));
        assert_eq!(rgba_to_hsv(Rgba::opaque(0, 255, 0)), Hsv::new(120, 100, 100));
        assert_eq!(rgba_to_hsv(Rgba::opaque(0, 0, 255)), Hsv::new(240, 100, 100));
        assert_eq!(rgba_to_hsl(Rgba::opaque(0, 0, 255)), Hsl::new(240, 100, 50));
        assert_eq!(hsv_to_rgba(Hsv::new(300, 100, 100)), Rgba::opaque(255, 0, 255));
        assert_eq!(hsl_to_rgba(Hsl::new(180, 100, 50)), Rgba::opaque(0, 255, 255));
        // 360 is accepted as input and lands on red.
        assert_eq!(hsv_to_rgba(Hsv::new(360, 100, 100)), Rgba::opaque(255, 0, 0));
    }

    #[test]
    fn test_hue_output_stays_below_360() {
        // Just below a full turn; rounds up to 360 before wrapping.
        let hsv = rgba_to_hsv(Rgba::opaque(255, 0, 1));
        assert!(hsv.h < 360);
        assert_eq!(hsv.h, 0);
    }

    // Whole-percent storage: dominant channel within 1, others within 3 (HSV), 5 (HSL).
    #[test]
    fn test_round_trip_tolerance() {
        for r in 0..=255u8 {
            for g in (0..=255u8).step_by(3) {
                for b in (0..=255u8).step_by(7) {
                    let rgba = Rgba::opaque(r, g, b);

                    let back = hsv_to_rgba(rgba_to_hsv(rgba));
                    let channels = rgba.rgb();
                    let top = channels.iter().copied().max().unwrap_or(0);
                    let i = channels.iter().position(|&c| c == top).unwrap_or(0);
                    assert!(channels[i].abs_diff(back.rgb()[i]) <= 1, "{rgba:?} -> {back:?}");
                    assert!(max_diff(rgba, back) <= 3, "{rgba:?} -> {back:?}");

                    let back = hsl_to_rgba(rgba_to_hsl(rgba));
                    assert!(max_diff(rgba, back) <= 5, "{rgba:?} -> {back:?}");
                }
            }
        }
    }

    #[test]
    fn test_reference_hsv_round_trip_within_one_on_blue() {
        let back = hsv_to_rgba(Hsv::new(207, 76, 98));
        assert_eq!(back.b.abs_diff(251), 1);
    }

    #[test]
    fn test_parse_rgba_accepts_three_or_four_parts() {
        assert_eq!(parse_rgba("61,166,251").unwrap(), Rgba::opaque(61, 166, 251));
        assert_eq!(parse_rgba(" 1 , 2 ,3 , 0.5").unwrap(), Rgba::new(1, 2, 3, 0.5));
    }

    #[test]
    fn test_parse_rgba_range_violations() {
        let err = parse_rgba("300,0,0").unwrap_err();
        assert_eq!(
            err,
            ColorError::Range {
                channel: Channel::Rgba,
                value: 300.0,
                min: 0.0,
                max: 255.0
            }
        );
        assert!(parse_rgba("-1,0,0").unwrap_err().is_range());
        let err = parse_rgba("0,0,0,1.5").unwrap_err();
        assert!(err.is_range());
        assert_eq!(err.channel(), Channel::Alpha);
    }

    #[test]
    fn test_parse_rgba_parse_failures() {
        for bad in ["", "1,2", "1,2,3,4,5", "a,b,c", "1,,3", "1.5,2,3", "1,2,3,x"] {
            let err = parse_rgba(bad).unwrap_err();
            assert!(!err.is_range(), "{bad:?}");
        }
    }

    #[test]
    fn test_parse_hsv_and_hsl() {
        assert_eq!(parse_hsv("211, 73, 96").unwrap(), Hsv::new(211, 73, 96));
        assert_eq!(parse_hsl("211,89.9,60.4").unwrap(), Hsl::new(211, 90, 60));
        assert!(parse_hsv("361,0,0").unwrap_err().is_range());
        assert!(parse_hsl("0,101,0").unwrap_err().is_range());
        assert!(!parse_hsv("1,2").unwrap_err().is_range());
    }

    #[test]
    fn test_check_alpha_snaps_to_step() {
        assert_eq!(check_alpha(0.456).unwrap(), 0.46);
        assert_eq!(check_alpha(1.0).unwrap(), 1.0);
        assert!(check_alpha(1.01).unwrap_err().is_range());
        assert!(!check_alpha(f32::NAN).unwrap_err().is_range());
    }

    #[test]
    fn test_color_from_hsv_keeps_hue_for_black() {
        let c = Color::from_hsv(Hsv::new(120, 50, 0), 0.5);
        assert_eq!(c.hsv(), Hsv::new(120, 50, 0));
        assert_eq!(c.hex(), Hex::BLACK);
        assert_eq!(c.hsl(), Hsl::new(0, 0, 0));
        assert_eq!(c.alpha(), 0.5);
    }

    #[test]
    fn test_color_with_alpha_touches_only_rgba() {
        let c = Color::default();
        let faded = c.with_alpha(0.3);
        assert_eq!(faded.hex(), c.hex());
        assert_eq!(faded.hsv(), c.hsv());
        assert_eq!(faded.hsl(), c.hsl());
        assert_eq!(faded.rgba(), Rgba::new(61, 166, 251, 0.3));
    }

    #[test]
    fn test_signal_basic() {
        let sig = signal(42);
        assert_eq!(sig.get(), 42);

        sig.set(100);
        assert_eq!(sig.get(), 100);

        sig.update(|v| *v += 1);
        assert_eq!(sig.get(), 101);
    }

    #[test]
    fn test_signal_subscription() {
        let sig = signal(0);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let seen_clone = seen.clone();
        let id = sig.subscribe(move |v| seen_clone.borrow_mut().push(*v));

        sig.set(42);
        assert!(sig.unsubscribe(id));
        assert!(!sig.unsubscribe(id));
        sig.set(7);
        assert_eq!(*seen.borrow(), vec![42]);
    }

    #[test]
    fn test_signal_subscriber_can_unsubscribe_itself() {
        let sig = signal(0);
        let slot: Rc<Cell<Option<SubId>>> = Rc::new(Cell::new(None));
        let calls = Rc::new(Cell::new(0));

        let id = sig.subscribe({
            let sig = sig.clone();
            let slot = slot.clone();
            let calls = calls.clone();
            move |_| {
                calls.set(calls.get() + 1);
                if let Some(id) = slot.take() {
                    sig.unsubscribe(id);
                }
            }
        });
        slot.set(Some(id));

        sig.set(1);
        sig.set(2);
        assert_eq!(calls.get(), 1);
        assert_eq!(sig.subscriber_count(), 0);
    }

    #[test]
    fn test_scope_explicit_dispose() {
        let cleaned_up = Rc::new(Cell::new(0));

        let scope = Scope::new();
        let cleaned_up_clone = cleaned_up.clone();
        scope.add_disposer(move || cleaned_up_clone.set(cleaned_up_clone.get() + 1));

        assert_eq!(cleaned_up.get(), 0);
        let handle = scope.clone();
        scope.dispose();
        assert_eq!(cleaned_up.get(), 1);
        assert!(handle.is_disposed());

        handle.dispose();
        assert_eq!(cleaned_up.get(), 1);
    }

    #[test]
    fn test_scope_drop_runs_cleanup() {
        let cleaned_up = Rc::new(Cell::new(false));
        {
            let scope = Scope::new();
            let cleaned_up_clone = cleaned_up.clone();
            scope.add_disposer(move || cleaned_up_clone.set(true));
            assert!(!cleaned_up.get());
        } // Scope drops here
        assert!(cleaned_up.get());
    }

    #[test]
    fn test_scope_children_dispose_first() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let parent = Scope::new();
        let child = parent.child();

        parent.add_disposer({
            let order = order.clone();
            move || order.borrow_mut().push("parent")
        });
        child.add_disposer({
            let order = order.clone();
            move || order.borrow_mut().push("child")
        });

        parent.dispose();
        assert_eq!(*order.borrow(), vec!["child", "parent"]);
        assert!(child.is_disposed());
    }

    #[test]
    fn test_listen_dispose_unsubscribes_once() {
        let bus = signal(0u32);
        let d = listen(&bus, |_| {});
        assert_eq!(bus.subscriber_count(), 1);
        d.run();
        d.run();
        assert!(d.is_done());
        assert_eq!(bus.subscriber_count(), 0);
    }
}
