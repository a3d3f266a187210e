use super::request::{Auth, Folder, HttpMethod, KeyValuePair, Request, ResourceTree};

fn bearer(token: &str) -> Auth {
    Auth::Bearer { token: token.to_string() }
}

fn kv(pairs: &[(&str, &str)]) -> Vec<KeyValuePair> {
    pairs.iter().map(|(k, v)| KeyValuePair::new(*k, *v)).collect()
}

/// The built-in collection loaded at startup.
pub fn seed_tree() -> ResourceTree {
    let examples = Folder {
        name: "Examples".into(),
        requests: vec![
            Request {
                method: HttpMethod::Get,
                name: "Httpbin GET".into(),
                url: "https://httpbin.org/get".into(),
                headers: kv(&[("Accept", "application/json")]),
                params: kv(&[("foo", "bar"), ("page", "1")]),
                ..Default::default()
            },
            Request {
                method: HttpMethod::Post,
                name: "Httpbin POST".into(),
                url: "https://httpbin.org/post".into(),
                headers: kv(&[
                    ("Content-Type", "application/json"),
                    ("Accept", "application/json"),
                ]),
                body: "{\n  \"name\": \"example\",\n  \"value\": 42\n}".into(),
                auth: bearer("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9"),
                ..Default::default()
            },
        ],
    };

    let github = Folder {
        name: "GitHub".into(),
        requests: vec![
            Request {
                method: HttpMethod::Get,
                name: "Get User".into(),
                url: "https://api.github.com/users/octocat".into(),
                headers: kv(&[
                    ("Accept", "application/vnd.github+json"),
                    ("X-GitHub-Api-Version", "2022-11-28"),
                ]),
                ..Default::default()
            },
            Request {
                method: HttpMethod::Get,
                name: "List Repos".into(),
                url: "https://api.github.com/users/octocat/repos".into(),
                headers: kv(&[("Accept", "application/vnd.github+json")]),
                params: kv(&[("per_page", "30"), ("sort", "updated")]),
                auth: bearer("ghp_xxxxxxxxxxxxxxxxxxxx"),
                ..Default::default()
            },
            Request {
                method: HttpMethod::Post,
                name: "Create Issue".into(),
                url: "https://api.github.com/repos/octocat/Hello-World/issues".into(),
                headers: kv(&[
                    ("Accept", "application/vnd.github+json"),
                    ("Content-Type", "application/json"),
                ]),
                body: "{\n  \"title\": \"Found a bug\",\n  \"body\": \"Something is broken.\",\n  \"labels\": [\"bug\"]\n}".into(),
                auth: bearer("ghp_xxxxxxxxxxxxxxxxxxxx"),
                ..Default::default()
            },
        ],
    };

    let form = [("Content-Type", "application/x-www-form-urlencoded")];
    let stripe = Folder {
        name: "Stripe".into(),
        requests: vec![
            Request {
                method: HttpMethod::Get,
                name: "List Customers".into(),
                url: "https://api.stripe.com/v1/customers".into(),
                headers: kv(&form),
                params: kv(&[("limit", "10")]),
                auth: bearer("sk_test_xxxxxxxxxxxxxxxxxxxx"),
                ..Default::default()
            },
            Request {
                method: HttpMethod::Post,
                name: "Create Payment Intent".into(),
                url: "https://api.stripe.com/v1/payment_intents".into(),
                headers: kv(&form),
                body: "amount=2000&currency=usd&payment_method_types[]=card".into(),
                auth: bearer("sk_test_xxxxxxxxxxxxxxxxxxxx"),
                ..Default::default()
            },
            Request {
                method: HttpMethod::Delete,
                name: "Cancel Payment Intent".into(),
                url: "https://api.stripe.com/v1/payment_intents/pi_xxx/cancel".into(),
                headers: kv(&form),
                auth: bearer("sk_test_xxxxxxxxxxxxxxxxxxxx"),
                ..Default::default()
            },
        ],
    };

    ResourceTree::new(vec![examples, github, stripe])
}
