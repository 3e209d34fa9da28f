//! Cases for the variant annotation set endpoints.

use crate::Client;
use crate::check::Checks;
use crate::fixtures;
use crate::fixtures::Fixtures;
use crate::protocol::search::SearchVariantAnnotationSetsRequest;
use crate::suite::Failure;
use crate::suite::expect_status;

/// Every annotation set of the compliance variant set can be fetched by its
/// id, and the fetched record equals the searched one.
pub(crate) fn get_matches_search(client: &Client, _: &Fixtures) -> Result<(), Failure> {
    let variant_set_id = fixtures::variant_set_id(client)?;
    let sets = client
        .variant_annotation_sets()
        .pages(SearchVariantAnnotationSetsRequest::new(&variant_set_id))
        .records()?;

    let mut checks = Checks::default();
    checks.not_empty("variantAnnotationSets", &sets);

    for (index, searched) in sets.iter().enumerate() {
        let subject = format!("variantAnnotationSets[{index}]");

        checks.equal(
            format!("{subject}.variantSetId"),
            &searched.variant_set_id(),
            &Some(variant_set_id.as_str()),
        );

        let Some(id) = searched.id() else {
            checks.present(format!("{subject}.id"), &searched.id());
            continue;
        };

        let fetched = client.variant_annotation_sets().get(id)?;
        checks.equal(format!("{subject} fetched by id"), &fetched, searched);
    }

    checks.finish()?;
    Ok(())
}

/// Fetching a variant annotation set that does not exist is rejected with
/// `404`.
pub(crate) fn get_by_bad_id_fails(client: &Client, fixtures: &Fixtures) -> Result<(), Failure> {
    let result = client.variant_annotation_sets().get(&fixtures.unknown_id);
    expect_status(
        format!("variantAnnotationSet `{}`", fixtures.unknown_id),
        result,
        404,
    )
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::testing::ScriptedTransport;
    use crate::testing::annotation_set;
    use crate::testing::client;
    use crate::testing::compliant_server;
    use crate::testing::compliant_server_with;

    #[test]
    fn it_passes_against_a_compliant_server() -> Result<(), Box<dyn std::error::Error>> {
        let client = client(compliant_server());
        get_matches_search(&client, &Fixtures::default())?;
        get_by_bad_id_fails(&client, &Fixtures::default())?;
        Ok(())
    }

    #[test]
    fn a_dropped_field_is_a_violation() {
        let mut fetched = annotation_set();
        fetched.as_object_mut().unwrap().remove("analysis");

        let transport = ScriptedTransport::default().on_get("/variantannotationsets/vas0", 200, fetched);

        let failure =
            get_matches_search(&client(compliant_server_with(transport)), &Fixtures::default())
                .unwrap_err();

        match failure {
            Failure::Assertions(violations) => {
                assert_eq!(violations.len(), 1);
                assert_eq!(
                    violations.first().subject(),
                    "variantAnnotationSets[0] fetched by id"
                );
            }
            failure => panic!("unexpected failure: {failure:?}"),
        }
    }

    #[test]
    fn an_unknown_field_is_compared_too() {
        let mut fetched = annotation_set();
        fetched["created"] = json!("2016-01-01");

        let transport = ScriptedTransport::default().on_get("/variantannotationsets/vas0", 200, fetched);

        let result =
            get_matches_search(&client(compliant_server_with(transport)), &Fixtures::default());
        assert!(matches!(result, Err(Failure::Assertions(_))));
    }

    #[test]
    fn a_changed_analysis_attribute_is_a_violation() {
        let mut fetched = annotation_set();
        fetched["analysis"]["attributes"]["attr"]["source"] =
            json!({"values": [{"stringValue": "RefSeq"}]});

        let transport = ScriptedTransport::default().on_get("/variantannotationsets/vas0", 200, fetched);

        let failure =
            get_matches_search(&client(compliant_server_with(transport)), &Fixtures::default())
                .unwrap_err();

        match failure {
            Failure::Assertions(violations) => {
                assert_eq!(violations.len(), 1);
                assert_eq!(
                    violations.first().subject(),
                    "variantAnnotationSets[0] fetched by id"
                );
            }
            failure => panic!("unexpected failure: {failure:?}"),
        }
    }

    #[test]
    fn a_failing_get_is_a_client_failure() {
        let transport = ScriptedTransport::default().on_get(
            "/variantannotationsets/vas0",
            500,
            json!({"message": "boom"}),
        );

        let failure =
            get_matches_search(&client(compliant_server_with(transport)), &Fixtures::default())
                .unwrap_err();
        assert_eq!(
            failure.to_string(),
            "get_variant_annotation_set: server returned 500: boom"
        );
    }

    #[test]
    fn a_not_found_server_passes_the_bad_id_case() -> Result<(), Box<dyn std::error::Error>> {
        get_by_bad_id_fails(&client(ScriptedTransport::default()), &Fixtures::default())?;
        Ok(())
    }
}
