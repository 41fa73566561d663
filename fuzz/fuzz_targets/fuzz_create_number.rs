#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use numlit::{Number, create_number, is_creatable, is_parsable, to_double};

/// Literal assembled from grammar pieces, so the fuzzer spends its time near
/// valid input instead of on random bytes.
#[derive(Debug, Arbitrary)]
struct Pieces {
    sign: Option<bool>,
    prefix: Prefix,
    mantissa: Vec<u8>,
    fraction: Option<Vec<u8>>,
    exponent: Option<(bool, Option<bool>, u16)>,
    suffix: Option<char>,
}

#[derive(Debug, Arbitrary)]
enum Prefix {
    None,
    Hex,
    Hash,
    Zero,
}

impl Pieces {
    fn render(&self) -> String {
        let mut out = String::new();
        match self.sign {
            Some(true) => out.push('-'),
            Some(false) => out.push('+'),
            None => {}
        }
        out.push_str(match self.prefix {
            Prefix::None => "",
            Prefix::Hex => "0x",
            Prefix::Hash => "#",
            Prefix::Zero => "0",
        });
        let digits = |bytes: &[u8]| -> String {
            bytes.iter().map(|b| char::from(b'0' + b % 10)).collect()
        };
        out.push_str(&digits(&self.mantissa));
        if let Some(fraction) = &self.fraction {
            out.push('.');
            out.push_str(&digits(fraction));
        }
        if let Some((upper, sign, value)) = self.exponent {
            out.push(if upper { 'E' } else { 'e' });
            match sign {
                Some(true) => out.push('-'),
                Some(false) => out.push('+'),
                None => {}
            }
            out.push_str(&value.to_string());
        }
        if let Some(suffix) = self.suffix {
            out.push(suffix);
        }
        out
    }
}

fn check(text: &str) {
    let parsed = create_number(Some(text));

    if is_creatable(Some(text)) {
        match &parsed {
            Ok(_) => {}
            // Exponents beyond the exact decimal range are the one known gap.
            Err(e) if e.is_overflow() => {}
            Err(e) => panic!("{text:?} is creatable but failed: {e}"),
        }
    }

    if is_parsable(Some(text)) {
        assert!(
            !to_double(Some(text), f64::NAN).is_nan(),
            "{text:?} is parsable but does not convert"
        );
    }

    if let Ok(Some(number)) = parsed {
        let rendered = number.to_string();
        let reparsed: Number = rendered
            .parse()
            .unwrap_or_else(|e| panic!("{rendered:?} from {text:?} does not reparse: {e}"));
        if !matches!(number, Number::Float(_) | Number::Double(_)) {
            assert_eq!(
                number.to_big_decimal(),
                reparsed.to_big_decimal(),
                "{text:?} changed value through {rendered:?}"
            );
        }
    }
}

fuzz_target!(|input: (Pieces, &str)| {
    check(&input.0.render());
    check(input.1);
});
