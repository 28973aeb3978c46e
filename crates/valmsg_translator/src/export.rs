use std::collections::BTreeMap;

use crate::store::Translator;

/// Serialize the store's registered catalog as a flat JSON object, the
/// same shape used for flat translation files: plain templates under their
/// key, cardinal variants under `key.category`. Keys are sorted so repeated
/// exports of the same store are byte-identical.
pub fn export_flat_catalog(translator: &Translator) -> String {
    let mut entries: BTreeMap<String, &str> = BTreeMap::new();

    for (key, template) in &translator.templates {
        entries.insert(key.clone(), &template.pattern);
    }
    for key in translator.cardinal_templates.keys() {
        for (category, template) in translator.cardinal_forms(key) {
            entries.insert(format!("{key}.{category}"), &template.pattern);
        }
    }

    // BTreeMap serialization cannot fail: keys are strings, values are strings.
    serde_json::to_string_pretty(&entries).unwrap_or_else(|_| String::from("{}"))
}
