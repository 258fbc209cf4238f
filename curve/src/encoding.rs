//! Point encodings.
//!
//! Text: a point is `X Y Z`, whitespace separated, every `Fq` a decimal
//! integer below the modulus and every `Fq2` the pair `c0 c1`. A sequence is
//! its length followed by the points.
//!
//! Binary: `ark-serialize` of the three coordinates. serde goes through the
//! text form.

use ark_ff::{BigInt, PrimeField};
use ark_serialize::{
    CanonicalDeserialize, CanonicalSerialize, Compress, Read, SerializationError, Valid, Validate,
    Write,
};
use core::fmt;
use core::str::FromStr;
use num_bigint::BigUint;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::CurveError;
use crate::fields::{Fq, Fq2};
use crate::jacobian::Jacobian;
use crate::params::CurveParams;

/// Decimal text form of a coordinate field element.
pub trait FieldCodec: Sized {
    fn write_decimal<W: fmt::Write>(&self, out: &mut W) -> fmt::Result;

    fn read_decimal<'a, I>(tokens: &mut I) -> Result<Self, CurveError>
    where
        I: Iterator<Item = &'a str>;
}

impl FieldCodec for Fq {
    fn write_decimal<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        write!(out, "{}", BigUint::from(self.into_bigint()))
    }

    fn read_decimal<'a, I>(tokens: &mut I) -> Result<Self, CurveError>
    where
        I: Iterator<Item = &'a str>,
    {
        let token = tokens.next().ok_or(CurveError::UnexpectedEnd)?;
        parse_fq(token)
    }
}

impl FieldCodec for Fq2 {
    fn write_decimal<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        self.c0.write_decimal(out)?;
        out.write_char(' ')?;
        self.c1.write_decimal(out)
    }

    fn read_decimal<'a, I>(tokens: &mut I) -> Result<Self, CurveError>
    where
        I: Iterator<Item = &'a str>,
    {
        let c0 = Fq::read_decimal(tokens)?;
        let c1 = Fq::read_decimal(tokens)?;
        Ok(Fq2::new(c0, c1))
    }
}

fn parse_fq(token: &str) -> Result<Fq, CurveError> {
    let invalid = || CurveError::InvalidFieldElement(token.to_string());

    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let value = BigUint::parse_bytes(token.as_bytes(), 10).ok_or_else(invalid)?;
    let bigint = BigInt::<4>::try_from(value).map_err(|_| invalid())?;
    Fq::from_bigint(bigint).ok_or_else(invalid)
}

impl<P: CurveParams> Jacobian<P> {
    fn read_tokens<'a, I>(tokens: &mut I) -> Result<Self, CurveError>
    where
        I: Iterator<Item = &'a str>,
    {
        let x = P::BaseField::read_decimal(tokens)?;
        let y = P::BaseField::read_decimal(tokens)?;
        let z = P::BaseField::read_decimal(tokens)?;
        Ok(Self::new(x, y, z))
    }
}

impl<P: CurveParams> fmt::Display for Jacobian<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.x.write_decimal(f)?;
        f.write_str(" ")?;
        self.y.write_decimal(f)?;
        f.write_str(" ")?;
        self.z.write_decimal(f)
    }
}

/// Parses a single point. The curve equation is not checked.
impl<P: CurveParams> FromStr for Jacobian<P> {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let point = Self::read_tokens(&mut tokens)?;
        if tokens.next().is_some() {
            return Err(CurveError::TrailingData);
        }
        Ok(point)
    }
}

/// Count on the first line, one point per line after it.
pub fn encode_points<P: CurveParams>(points: &[Jacobian<P>]) -> String {
    let mut out = points.len().to_string();
    for point in points {
        out.push('\n');
        out.push_str(&point.to_string());
    }
    out
}

/// Inverse of [`encode_points`]. Whitespace layout is not significant.
pub fn decode_points<P: CurveParams>(s: &str) -> Result<Vec<Jacobian<P>>, CurveError> {
    let mut tokens = s.split_whitespace();
    let count_token = tokens.next().ok_or(CurveError::UnexpectedEnd)?;
    if !count_token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CurveError::InvalidCount(count_token.to_string()));
    }
    let count: usize = count_token
        .parse()
        .map_err(|_| CurveError::InvalidCount(count_token.to_string()))?;

    let mut points = Vec::new();
    for _ in 0..count {
        points.push(Jacobian::read_tokens(&mut tokens)?);
    }
    if tokens.next().is_some() {
        return Err(CurveError::TrailingData);
    }
    Ok(points)
}

impl<P: CurveParams> Serialize for Jacobian<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, P: CurveParams> Deserialize<'de> for Jacobian<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

impl<P: CurveParams> CanonicalSerialize for Jacobian<P> {
    fn serialize_with_mode<W: Write>(
        &self,
        mut writer: W,
        compress: Compress,
    ) -> Result<(), SerializationError> {
        self.x.serialize_with_mode(&mut writer, compress)?;
        self.y.serialize_with_mode(&mut writer, compress)?;
        self.z.serialize_with_mode(&mut writer, compress)
    }

    fn serialized_size(&self, compress: Compress) -> usize {
        self.x.serialized_size(compress)
            + self.y.serialized_size(compress)
            + self.z.serialized_size(compress)
    }
}

impl<P: CurveParams> Valid for Jacobian<P> {
    fn check(&self) -> Result<(), SerializationError> {
        if self.is_well_formed() {
            Ok(())
        } else {
            Err(SerializationError::InvalidData)
        }
    }
}

impl<P: CurveParams> CanonicalDeserialize for Jacobian<P> {
    fn deserialize_with_mode<R: Read>(
        mut reader: R,
        compress: Compress,
        validate: Validate,
    ) -> Result<Self, SerializationError> {
        let x = P::BaseField::deserialize_with_mode(&mut reader, compress, validate)?;
        let y = P::BaseField::deserialize_with_mode(&mut reader, compress, validate)?;
        let z = P::BaseField::deserialize_with_mode(&mut reader, compress, validate)?;

        let point = Self::new(x, y, z);
        if let Validate::Yes = validate {
            point.check()?;
        }
        Ok(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jacobian::{G1, G2};
    use crate::params::G1Params;
    use ark_ff::{AdditiveGroup, Field};

    #[test]
    fn test_generator_text() {
        assert_eq!(G1::one().to_string(), "1 2 1");
        assert_eq!(G1::zero().to_string(), "0 1 0");
        assert_eq!(G2::zero().to_string(), "0 0 1 0 0 0");
        assert_eq!("1 2 1".parse::<G1>(), Ok(G1::one()));
        assert_eq!("  1\n2\t1 ".parse::<G1>(), Ok(G1::one()));
    }

    #[test]
    fn test_rejects_malformed_field_elements() {
        let modulus = BigUint::from(Fq::MODULUS).to_string();
        for bad in ["-1", "0x10", "1.5", "abc", "+3", modulus.as_str()] {
            let text = format!("{bad} 2 1");
            assert_eq!(
                text.parse::<G1>(),
                Err(CurveError::InvalidFieldElement(bad.to_string())),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_rejects_short_and_long_input() {
        assert_eq!("1 2".parse::<G1>(), Err(CurveError::UnexpectedEnd));
        assert_eq!("1 2 1 0".parse::<G1>(), Err(CurveError::TrailingData));
        // a G1 encoding is too short for G2
        assert_eq!("1 2 1".parse::<G2>(), Err(CurveError::UnexpectedEnd));
    }

    #[test]
    fn test_sequence() {
        let points = vec![G1::one(), G1::zero(), G1::one().dbl()];
        let text = encode_points(&points);
        assert!(text.starts_with("3\n1 2 1\n0 1 0\n"));
        assert_eq!(decode_points::<G1Params>(&text), Ok(points));

        assert_eq!(decode_points::<G1Params>("0"), Ok(vec![]));
        assert_eq!(decode_points::<G1Params>(""), Err(CurveError::UnexpectedEnd));
        assert_eq!(
            decode_points::<G1Params>("-1"),
            Err(CurveError::InvalidCount("-1".to_string()))
        );
        assert_eq!(
            decode_points::<G1Params>("two 1 2 1"),
            Err(CurveError::InvalidCount("two".to_string()))
        );
        assert_eq!(
            decode_points::<G1Params>("2 1 2 1"),
            Err(CurveError::UnexpectedEnd)
        );
        assert_eq!(
            decode_points::<G1Params>("1 1 2 1 5"),
            Err(CurveError::TrailingData)
        );
    }

    #[test]
    fn test_text_decode_does_not_validate() {
        let off_curve: G1 = "1 3 1".parse().unwrap();
        assert!(!off_curve.is_well_formed());
    }

    #[test]
    fn test_binary_validation_is_opt_in() {
        let off_curve = G1::new(Fq::ONE, Fq::from(3u64), Fq::ONE);
        let mut bytes = Vec::new();
        off_curve.serialize_uncompressed(&mut bytes).unwrap();
        assert_eq!(bytes.len(), off_curve.uncompressed_size());

        assert!(G1::deserialize_uncompressed(&bytes[..]).is_err());
        let unchecked = G1::deserialize_uncompressed_unchecked(&bytes[..]).unwrap();
        assert_eq!(unchecked.y, Fq::from(3u64));

        let zero = G1::zero();
        let mut bytes = Vec::new();
        zero.serialize_compressed(&mut bytes).unwrap();
        let decoded = G1::deserialize_compressed(&bytes[..]).unwrap();
        assert!(decoded.is_zero());
        assert_eq!(decoded.z, Fq::ZERO);
    }
}
