/// Placeholder product for services Metasploit named but could not fingerprint
pub const UNKNOWN_PRODUCT: &str = "Unknown";

/// FieldDerivation policy for turning raw Metasploit fields into Lair values
///
/// Every rule here is total: malformed input degrades to a default value
/// instead of producing an error, so one bad record never aborts an import.
pub struct FieldDerivation;

impl FieldDerivation {
    /// Parses a port number, yielding 0 when the text is not a valid port
    ///
    /// Surrounding whitespace, negative numbers and values above 65535 all
    /// count as invalid.
    pub fn parse_port(text: &str) -> u16 {
        Self::try_parse_port(text).unwrap_or(0)
    }

    /// Returns the port number, or None when `parse_port` would fall back to 0
    pub fn try_parse_port(text: &str) -> Option<u16> {
        text.parse::<u16>().ok()
    }

    /// Derives the Lair service name and product from Metasploit's name and info
    ///
    /// # Returns
    /// `(service, product)`:
    /// - both None when the name is empty
    /// - otherwise the name, with the info string as product, or
    ///   "Unknown" when the info string is empty
    pub fn service_identity(name: &str, info: &str) -> (Option<String>, Option<String>) {
        if name.is_empty() {
            return (None, None);
        }

        let product = if info.is_empty() {
            UNKNOWN_PRODUCT
        } else {
            info
        };

        (Some(name.to_string()), Some(product.to_string()))
    }

    /// Joins the five OS descriptor fields with single spaces
    ///
    /// Empty fields are kept as empty segments, so the result can contain
    /// consecutive or trailing spaces.
    pub fn os_fingerprint(name: &str, flavor: &str, sp: &str, lang: &str, arch: &str) -> String {
        [name, flavor, sp, lang, arch].join(" ")
    }
}
