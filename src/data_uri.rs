/// Borrowed view of a `data:` URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataUri<'a> {
    pub media_type: &'a str,
    pub is_base64: bool,
    pub payload: &'a str,
}

impl<'a> DataUri<'a> {
    /// Splits `data:<media-type>[;params][;base64],<payload>`. Returns `None`
    /// if the scheme or the comma separator is missing.
    pub fn parse(input: &'a str) -> Option<Self> {
        let rest = input.strip_prefix("data:")?;
        let (header, payload) = rest.split_once(',')?;

        let mut params = header.split(';');
        let media_type = params.next().unwrap_or_default();
        let is_base64 = params.any(|param| param.eq_ignore_ascii_case("base64"));

        Some(Self {
            media_type,
            is_base64,
            payload,
        })
    }

    /// Approximate decoded size in bytes, without decoding.
    pub fn decoded_len_estimate(&self) -> usize {
        if self.is_base64 {
            base64::decoded_len_estimate(self.payload.len())
        } else {
            self.payload.len()
        }
    }
}
