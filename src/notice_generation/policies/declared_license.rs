/// DeclaredLicensePolicy for picking a label from the licenses an artifact declares itself
///
/// Used when no lookup entry resolves the artifact. Rules:
/// 1. Blank names are ignored, duplicates collapse
/// 2. One remaining license: its name
/// 3. Several: all names joined with " OR " (the consumer may pick any)
/// 4. None: no label
pub struct DeclaredLicensePolicy;

/// Separator between alternative licenses in a combined label
pub const LICENSE_ALTERNATIVE_SEPARATOR: &str = " OR ";

impl DeclaredLicensePolicy {
    /// Selects the label for a list of declared license names
    ///
    /// # Arguments
    /// * `declared` - License names in declaration order
    ///
    /// # Returns
    /// The label, or None if nothing usable was declared
    pub fn select_license(declared: &[String]) -> Option<String> {
        let names = Self::distinct_names(declared);
        match names.len() {
            0 => None,
            _ => Some(names.join(LICENSE_ALTERNATIVE_SEPARATOR)),
        }
    }

    /// Whether the declared licenses are alternatives the reader has to know about
    pub fn is_ambiguous(declared: &[String]) -> bool {
        Self::distinct_names(declared).len() > 1
    }

    fn distinct_names(declared: &[String]) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::with_capacity(declared.len());
        for name in declared.iter().map(|n| n.trim()) {
            if !name.is_empty() && !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }
}
