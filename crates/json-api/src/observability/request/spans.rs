//! Route templates for span names and metric labels.

use railmeal_app::pnr::Pnr;

/// Collections whose next path segment is a PNR.
const PNR_COLLECTIONS: [&str; 2] = ["orders", "reservations"];

/// Replaces PNR path segments with `{pnr}`, keeping label cardinality bounded.
pub(super) fn route_template(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let mut template = String::new();
    let mut previous: Option<&str> = None;

    for segment in path.trim_start_matches('/').split('/') {
        template.push('/');

        let keyed = previous.is_some_and(|prev| PNR_COLLECTIONS.contains(&prev));

        if keyed && Pnr::parse(segment).is_ok() {
            template.push_str("{pnr}");
        } else {
            template.push_str(segment);
        }

        previous = Some(segment);
    }

    template
}

#[cfg(test)]
mod tests {
    use super::route_template;

    #[test]
    fn pnr_segments_are_templated() {
        assert_eq!(route_template("/orders/4521873690"), "/orders/{pnr}");
        assert_eq!(
            route_template("/orders/4521873690/confirm"),
            "/orders/{pnr}/confirm"
        );
        assert_eq!(
            route_template("/reservations/AB12CD"),
            "/reservations/{pnr}"
        );
    }

    #[test]
    fn other_segments_are_kept() {
        assert_eq!(route_template("/"), "/");
        assert_eq!(route_template("/menu"), "/menu");
        assert_eq!(route_template("/healthcheck"), "/healthcheck");
        assert_eq!(route_template("/orders"), "/orders");
    }
}
