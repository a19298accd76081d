// @generated by fastcbor-gen. DO NOT EDIT.
// Source: types.rs

use super::types::*;

impl Sig {
    /// Append `self` to `buf` as a CBOR map.
    pub fn marshal_cbor(&self, buf: &mut Vec<u8>) -> Result<(), ::fastcbor::CborError> {
        let len: u32 = 1u32;
        ::fastcbor::put_map_header(buf, len);
        ::fastcbor::put_text(buf, "s");
        ::fastcbor::put_u64(buf, self.s);
        Ok(())
    }
    /// Decode one record from `input` with full validation, returning the
    /// remainder. Text is copied into owned storage.
    pub fn decode_safe(input: &[u8]) -> Result<(Self, &[u8]), ::fastcbor::CborError> {
        let end = ::fastcbor::well_formed_item(input, &::fastcbor::DecodeLimits::default())?;
        let mut r = ::fastcbor::TrustedReader::new(&input[..end]);
        let v = Self::read_safe(&mut r)?;
        Ok((v, &input[end..]))
    }
    /// Decode a map body in safe mode. The bytes must already have passed
    /// the well-formedness check.
    pub fn read_safe(
        r: &mut ::fastcbor::TrustedReader<'_>,
    ) -> Result<Self, ::fastcbor::CborError> {
        let mut v = Self::default();
        let n = r.map_header()?;
        for _ in 0..n {
            match r.str()? {
                "s" => {
                    v.s = r.u64()?;
                }
                _ => r.skip_item()?,
            }
        }
        Ok(v)
    }
    /// Decode one record without validation, returning the remainder.
    /// Text may alias `input`; the caller keeps `input` immutable and
    /// alive for as long as the record.
    pub fn decode_trusted(input: &[u8]) -> Result<(Self, &[u8]), ::fastcbor::CborError> {
        let mut r = ::fastcbor::TrustedReader::new(input);
        let v = Self::read_trusted(&mut r)?;
        Ok((v, r.rest()))
    }
    /// Decode a map body in trusted mode.
    pub fn read_trusted(
        r: &mut ::fastcbor::TrustedReader<'_>,
    ) -> Result<Self, ::fastcbor::CborError> {
        let mut v = Self::default();
        let n = r.map_header()?;
        for _ in 0..n {
            match r.str()? {
                "s" => {
                    v.s = r.u64()?;
                }
                _ => r.skip_item()?,
            }
        }
        Ok(v)
    }
}
impl<'a> Pair<'a> {
    /// Append `self` to `buf` as a CBOR map.
    pub fn marshal_cbor(&self, buf: &mut Vec<u8>) -> Result<(), ::fastcbor::CborError> {
        let mut len: u32 = 0u32;
        if self.a != 0 {
            len += 1;
        }
        if !self.b.is_empty() {
            len += 1;
        }
        ::fastcbor::put_map_header(buf, len);
        if self.a != 0 {
            ::fastcbor::put_text(buf, "a");
            ::fastcbor::put_u64(buf, self.a);
        }
        if !self.b.is_empty() {
            ::fastcbor::put_text(buf, "b");
            ::fastcbor::put_text(buf, self.b.as_ref());
        }
        Ok(())
    }
    /// Decode one record from `input` with full validation, returning the
    /// remainder. Text is copied into owned storage.
    pub fn decode_safe(input: &[u8]) -> Result<(Pair<'static>, &[u8]), ::fastcbor::CborError> {
        let end = ::fastcbor::well_formed_item(input, &::fastcbor::DecodeLimits::default())?;
        let mut r = ::fastcbor::TrustedReader::new(&input[..end]);
        let v = Self::read_safe(&mut r)?;
        Ok((v, &input[end..]))
    }
    /// Decode a map body in safe mode. The bytes must already have passed
    /// the well-formedness check.
    pub fn read_safe(
        r: &mut ::fastcbor::TrustedReader<'_>,
    ) -> Result<Pair<'static>, ::fastcbor::CborError> {
        let mut v = <Pair<'static>>::default();
        let n = r.map_header()?;
        for _ in 0..n {
            match r.str()? {
                "a" => {
                    v.a = r.u64()?;
                }
                "b" => {
                    v.b = ::std::borrow::Cow::Owned(r.str()?.to_owned());
                }
                _ => r.skip_item()?,
            }
        }
        Ok(v)
    }
    /// Decode one record without validation, returning the remainder.
    /// Text may alias `input`; the caller keeps `input` immutable and
    /// alive for as long as the record.
    pub fn decode_trusted(input: &'a [u8]) -> Result<(Self, &'a [u8]), ::fastcbor::CborError> {
        let mut r = ::fastcbor::TrustedReader::new(input);
        let v = Self::read_trusted(&mut r)?;
        Ok((v, r.rest()))
    }
    /// Decode a map body in trusted mode.
    pub fn read_trusted(
        r: &mut ::fastcbor::TrustedReader<'a>,
    ) -> Result<Self, ::fastcbor::CborError> {
        let mut v = Self::default();
        let n = r.map_header()?;
        for _ in 0..n {
            match r.str()? {
                "a" => {
                    v.a = r.u64()?;
                }
                "b" => {
                    v.b = ::std::borrow::Cow::Borrowed(r.str()?);
                }
                _ => r.skip_item()?,
            }
        }
        Ok(v)
    }
}
impl Pending {
    /// Append `self` to `buf` as a CBOR map.
    pub fn marshal_cbor(&self, buf: &mut Vec<u8>) -> Result<(), ::fastcbor::CborError> {
        let len: u32 = 2u32;
        ::fastcbor::put_map_header(buf, len);
        ::fastcbor::put_text(buf, "nonce");
        ::fastcbor::put_u64(buf, self.nonce);
        ::fastcbor::put_text(buf, "payload");
        ::fastcbor::put_bytes(buf, &self.payload);
        Ok(())
    }
    /// Decode one record from `input` with full validation, returning the
    /// remainder. Text is copied into owned storage.
    pub fn decode_safe(input: &[u8]) -> Result<(Self, &[u8]), ::fastcbor::CborError> {
        let end = ::fastcbor::well_formed_item(input, &::fastcbor::DecodeLimits::default())?;
        let mut r = ::fastcbor::TrustedReader::new(&input[..end]);
        let v = Self::read_safe(&mut r)?;
        Ok((v, &input[end..]))
    }
    /// Decode a map body in safe mode. The bytes must already have passed
    /// the well-formedness check.
    pub fn read_safe(
        r: &mut ::fastcbor::TrustedReader<'_>,
    ) -> Result<Self, ::fastcbor::CborError> {
        let mut v = Self::default();
        let n = r.map_header()?;
        for _ in 0..n {
            match r.str()? {
                "nonce" => {
                    v.nonce = r.u64()?;
                }
                "payload" => {
                    v.payload = r.bytes()?.to_vec();
                }
                _ => r.skip_item()?,
            }
        }
        Ok(v)
    }
    /// Decode one record without validation, returning the remainder.
    /// Text may alias `input`; the caller keeps `input` immutable and
    /// alive for as long as the record.
    pub fn decode_trusted(input: &[u8]) -> Result<(Self, &[u8]), ::fastcbor::CborError> {
        let mut r = ::fastcbor::TrustedReader::new(input);
        let v = Self::read_trusted(&mut r)?;
        Ok((v, r.rest()))
    }
    /// Decode a map body in trusted mode.
    pub fn read_trusted(
        r: &mut ::fastcbor::TrustedReader<'_>,
    ) -> Result<Self, ::fastcbor::CborError> {
        let mut v = Self::default();
        let n = r.map_header()?;
        for _ in 0..n {
            match r.str()? {
                "nonce" => {
                    v.nonce = r.u64()?;
                }
                "payload" => {
                    v.payload = r.bytes()?.to_vec();
                }
                _ => r.skip_item()?,
            }
        }
        Ok(v)
    }
}
impl Stamp {
    /// Append `self` to `buf` as a CBOR map.
    pub fn marshal_cbor(&self, buf: &mut Vec<u8>) -> Result<(), ::fastcbor::CborError> {
        let len: u32 = 2u32;
        ::fastcbor::put_map_header(buf, len);
        ::fastcbor::put_text(buf, "at");
        ::fastcbor::put_time_epoch(buf, &self.at);
        ::fastcbor::put_text(buf, "took");
        ::fastcbor::put_duration(buf, &self.took)?;
        Ok(())
    }
    /// Decode one record from `input` with full validation, returning the
    /// remainder. Text is copied into owned storage.
    pub fn decode_safe(input: &[u8]) -> Result<(Self, &[u8]), ::fastcbor::CborError> {
        let end = ::fastcbor::well_formed_item(input, &::fastcbor::DecodeLimits::default())?;
        let mut r = ::fastcbor::TrustedReader::new(&input[..end]);
        let v = Self::read_safe(&mut r)?;
        Ok((v, &input[end..]))
    }
    /// Decode a map body in safe mode. The bytes must already have passed
    /// the well-formedness check.
    pub fn read_safe(
        r: &mut ::fastcbor::TrustedReader<'_>,
    ) -> Result<Self, ::fastcbor::CborError> {
        let mut v = Self::default();
        let n = r.map_header()?;
        for _ in 0..n {
            match r.str()? {
                "at" => {
                    v.at = r.time()?;
                }
                "took" => {
                    v.took = r.duration()?;
                }
                _ => r.skip_item()?,
            }
        }
        Ok(v)
    }
    /// Decode one record without validation, returning the remainder.
    /// Text may alias `input`; the caller keeps `input` immutable and
    /// alive for as long as the record.
    pub fn decode_trusted(input: &[u8]) -> Result<(Self, &[u8]), ::fastcbor::CborError> {
        let mut r = ::fastcbor::TrustedReader::new(input);
        let v = Self::read_trusted(&mut r)?;
        Ok((v, r.rest()))
    }
    /// Decode a map body in trusted mode.
    pub fn read_trusted(
        r: &mut ::fastcbor::TrustedReader<'_>,
    ) -> Result<Self, ::fastcbor::CborError> {
        let mut v = Self::default();
        let n = r.map_header()?;
        for _ in 0..n {
            match r.str()? {
                "at" => {
                    v.at = r.time()?;
                }
                "took" => {
                    v.took = r.duration()?;
                }
                _ => r.skip_item()?,
            }
        }
        Ok(v)
    }
}
impl Ledger {
    /// Append `self` to `buf` as a CBOR map.
    pub fn marshal_cbor(&self, buf: &mut Vec<u8>) -> Result<(), ::fastcbor::CborError> {
        let mut len: u32 = 10u32;
        if !self.memo.is_empty() {
            len += 1;
        }
        ::fastcbor::put_map_header(buf, len);
        ::fastcbor::put_text(buf, "height");
        ::fastcbor::put_u64(buf, self.height);
        ::fastcbor::put_text(buf, "who");
        ::fastcbor::put_text(buf, &self.owner);
        if !self.memo.is_empty() {
            ::fastcbor::put_text(buf, "memo");
            ::fastcbor::put_text(buf, &self.memo);
        }
        ::fastcbor::put_text(buf, "flag");
        ::fastcbor::put_bool(buf, self.flag);
        ::fastcbor::put_text(buf, "score");
        ::fastcbor::put_f64(buf, self.score);
        ::fastcbor::put_text(buf, "tags");
        ::fastcbor::put_text_array(buf, &self.tags)?;
        ::fastcbor::put_text(buf, "txs");
        let n = ::fastcbor::check_len(self.txs.len(), buf.len())?;
        ::fastcbor::put_array_header(buf, n);
        for item in &self.txs {
            item.marshal_cbor(buf)?;
        }
        ::fastcbor::put_text(buf, "pending");
        let n = ::fastcbor::check_len(self.pending.len(), buf.len())?;
        ::fastcbor::put_map_header(buf, n);
        for (k, val) in &self.pending {
            ::fastcbor::put_u64(buf, *k);
            match val {
                Some(elem) => elem.marshal_cbor(buf)?,
                None => ::fastcbor::put_null(buf),
            }
        }
        ::fastcbor::put_text(buf, "counts");
        let n = ::fastcbor::check_len(self.counts.len(), buf.len())?;
        ::fastcbor::put_map_header(buf, n);
        for (k, val) in &self.counts {
            ::fastcbor::put_u64(buf, u64::from(*k));
            ::fastcbor::put_u64(buf, *val);
        }
        ::fastcbor::put_text(buf, "labels");
        let n = ::fastcbor::check_len(self.labels.len(), buf.len())?;
        ::fastcbor::put_map_header(buf, n);
        for (k, val) in &self.labels {
            ::fastcbor::put_text(buf, k);
            ::fastcbor::put_text(buf, val);
        }
        ::fastcbor::put_text(buf, "parent");
        match &self.parent {
            Some(elem) => elem.marshal_cbor(buf)?,
            None => ::fastcbor::put_null(buf),
        }
        Ok(())
    }
    /// Decode one record from `input` with full validation, returning the
    /// remainder. Text is copied into owned storage.
    pub fn decode_safe(input: &[u8]) -> Result<(Self, &[u8]), ::fastcbor::CborError> {
        let end = ::fastcbor::well_formed_item(input, &::fastcbor::DecodeLimits::default())?;
        let mut r = ::fastcbor::TrustedReader::new(&input[..end]);
        let v = Self::read_safe(&mut r)?;
        Ok((v, &input[end..]))
    }
    /// Decode a map body in safe mode. The bytes must already have passed
    /// the well-formedness check.
    pub fn read_safe(
        r: &mut ::fastcbor::TrustedReader<'_>,
    ) -> Result<Self, ::fastcbor::CborError> {
        let mut v = Self::default();
        let n = r.map_header()?;
        for _ in 0..n {
            match r.str()? {
                "height" => {
                    v.height = r.u64()?;
                }
                "who" => {
                    v.owner = r.str()?.to_owned();
                }
                "memo" => {
                    v.memo = r.str()?.to_owned();
                }
                "flag" => {
                    v.flag = r.bool()?;
                }
                "score" => {
                    v.score = r.f64()?;
                }
                "tags" => {
                    v.tags = ::fastcbor::read_text_array(r)?;
                }
                "txs" => {
                    let n = r.array_header()?;
                    v.txs = Vec::with_capacity(n.min(64));
                    for _ in 0..n {
                        v.txs.push(Sig::read_safe(r)?);
                    }
                }
                "pending" => {
                    let n = r.map_header()?;
                    v.pending = Default::default();
                    for _ in 0..n {
                        let k = r.u64()?;
                        if r.peek_null() {
                            r.null()?;
                            v.pending.insert(k, None);
                        } else {
                            v.pending.insert(k, Some(Box::new(Pending::read_safe(r)?)));
                        }
                    }
                }
                "counts" => {
                    let n = r.map_header()?;
                    v.counts = Default::default();
                    for _ in 0..n {
                        let k = r.u32()?;
                        let val = r.u64()?;
                        v.counts.insert(k, val);
                    }
                }
                "labels" => {
                    let n = r.map_header()?;
                    v.labels = Default::default();
                    for _ in 0..n {
                        let k = r.str()?.to_owned();
                        let val = r.str()?.to_owned();
                        v.labels.insert(k, val);
                    }
                }
                "parent" => {
                    if r.peek_null() {
                        r.null()?;
                        v.parent = None;
                    } else {
                        v.parent = Some(Box::new(Ledger::read_safe(r)?));
                    }
                }
                _ => r.skip_item()?,
            }
        }
        Ok(v)
    }
    /// Decode one record without validation, returning the remainder.
    /// Text may alias `input`; the caller keeps `input` immutable and
    /// alive for as long as the record.
    pub fn decode_trusted(input: &[u8]) -> Result<(Self, &[u8]), ::fastcbor::CborError> {
        let mut r = ::fastcbor::TrustedReader::new(input);
        let v = Self::read_trusted(&mut r)?;
        Ok((v, r.rest()))
    }
    /// Decode a map body in trusted mode.
    pub fn read_trusted(
        r: &mut ::fastcbor::TrustedReader<'_>,
    ) -> Result<Self, ::fastcbor::CborError> {
        let mut v = Self::default();
        let n = r.map_header()?;
        for _ in 0..n {
            match r.str()? {
                "height" => {
                    v.height = r.u64()?;
                }
                "who" => {
                    v.owner = r.str()?.to_owned();
                }
                "memo" => {
                    v.memo = r.str()?.to_owned();
                }
                "flag" => {
                    v.flag = r.bool()?;
                }
                "score" => {
                    v.score = r.f64()?;
                }
                "tags" => {
                    v.tags = ::fastcbor::read_text_array(r)?;
                }
                "txs" => {
                    let n = r.array_header()?;
                    v.txs = Vec::with_capacity(n.min(64));
                    for _ in 0..n {
                        v.txs.push(Sig::read_trusted(r)?);
                    }
                }
                "pending" => {
                    let n = r.map_header()?;
                    v.pending = Default::default();
                    for _ in 0..n {
                        let k = r.u64()?;
                        if r.peek_null() {
                            r.null()?;
                            v.pending.insert(k, None);
                        } else {
                            v.pending.insert(k, Some(Box::new(Pending::read_trusted(r)?)));
                        }
                    }
                }
                "counts" => {
                    let n = r.map_header()?;
                    v.counts = Default::default();
                    for _ in 0..n {
                        let k = r.u32()?;
                        let val = r.u64()?;
                        v.counts.insert(k, val);
                    }
                }
                "labels" => {
                    let n = r.map_header()?;
                    v.labels = Default::default();
                    for _ in 0..n {
                        let k = r.str()?.to_owned();
                        let val = r.str()?.to_owned();
                        v.labels.insert(k, val);
                    }
                }
                "parent" => {
                    if r.peek_null() {
                        r.null()?;
                        v.parent = None;
                    } else {
                        v.parent = Some(Box::new(Ledger::read_trusted(r)?));
                    }
                }
                _ => r.skip_item()?,
            }
        }
        Ok(v)
    }
}
