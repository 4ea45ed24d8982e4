//! The `realms` command.

use rune_ir::Realm;

use crate::narrator::realm_description;

pub fn list_realms() {
    print!("{}", render_realms());
}

/// One line per realm: name, type families and description.
pub fn render_realms() -> String {
    let mut text = String::from("Realms:\n");
    for realm in Realm::ALL {
        text.push_str(&format!(
            "  {:<9} [{}] {}\n",
            realm.as_str(),
            realm.possible_types().join(", "),
            realm_description(realm)
        ));
    }
    text
}
