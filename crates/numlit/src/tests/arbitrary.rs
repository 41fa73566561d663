use quickcheck::{Arbitrary, Gen};

/// Short text drawn from the characters that matter to the literal grammar,
/// so most samples are near misses rather than noise.
#[derive(Debug, Clone)]
pub(crate) struct NearLiteral(pub String);

const ALPHABET: &[char] = &[
    '0', '0', '1', '7', '8', '9', '.', 'e', 'E', '+', '-', 'x', 'X', '#', 'a', 'F', 'l', 'L', 'f',
    'd', 'D', ' ',
];

impl Arbitrary for NearLiteral {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 10;
        Self(
            (0..len)
                .map(|_| *g.choose(ALPHABET).unwrap_or(&'0'))
                .collect(),
        )
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(Self))
    }
}

/// A well-formed literal without a type suffix: hex, or signed decimal with
/// optional fraction and exponent.
#[derive(Debug, Clone)]
pub(crate) struct ValidLiteral(pub String);

fn digits(g: &mut Gen, max: usize, set: &[char]) -> String {
    let len = usize::arbitrary(g) % (max + 1);
    (0..len).map(|_| *g.choose(set).unwrap_or(&'0')).collect()
}

const DECIMAL: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
const HEX: &[char] = &[
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'A', 'F',
];

impl Arbitrary for ValidLiteral {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut out = String::new();
        if bool::arbitrary(g) {
            out.push('-');
        }

        if usize::arbitrary(g) % 4 == 0 {
            out.push_str(*g.choose(&["0x", "0X", "#"]).unwrap_or(&"0x"));
            out.push_str(&digits(g, 20, HEX));
            out.push(*g.choose(HEX).unwrap_or(&'1'));
            return Self(out);
        }

        let mantissa = digits(g, 25, DECIMAL);
        // Keep integers decimal: a leading zero would make them octal.
        let mantissa = mantissa.trim_start_matches('0');
        out.push_str(mantissa);
        let fractional = bool::arbitrary(g);
        if fractional {
            out.push('.');
            out.push_str(&digits(g, 25, DECIMAL));
        }
        if mantissa.is_empty() {
            out.push('1');
        }
        if bool::arbitrary(g) {
            out.push(*g.choose(&['e', 'E']).unwrap_or(&'e'));
            out.push_str(*g.choose(&["", "+", "-"]).unwrap_or(&""));
            out.push_str(&(u16::arbitrary(g) % 500).to_string());
        }
        Self(out)
    }
}
