// palaver/palaver-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use palaver_utils::id_string;

id_string!(
    /// Uniquely identifies an account across all protocol providers, e.g. `jabber:a@prose.org`.
    AccountId
);
