//! Cases for the RNA quantification endpoints.

use crate::Client;
use crate::check::Checks;
use crate::fixtures;
use crate::fixtures::Fixtures;
use crate::suite::Failure;
use crate::suite::expect_status;

/// Every RNA quantification found by search can be fetched by its id, and
/// the fetched record equals the searched one.
pub(crate) fn get_matches_search(client: &Client, fixtures: &Fixtures) -> Result<(), Failure> {
    let set_id = fixtures::rna_quantification_set_id(client)?;
    let quantifications = fixtures::all_rna_quantifications(client, &set_id)?;

    let mut checks = Checks::default();
    checks.has_size(
        "rnaQuantifications",
        &quantifications,
        fixtures.expected_rna_quantifications,
    );

    for (index, searched) in quantifications.iter().enumerate() {
        let subject = format!("rnaQuantifications[{index}]");

        let Some(id) = searched.id() else {
            checks.present(format!("{subject}.id"), &searched.id());
            continue;
        };

        let fetched = client.rna_quantifications().get(id)?;
        checks.equal(format!("{subject} fetched by id"), &fetched, searched);
    }

    checks.finish()?;
    Ok(())
}

/// Fetching an RNA quantification that does not exist is rejected with
/// `404`.
pub(crate) fn get_by_bad_id_fails(client: &Client, fixtures: &Fixtures) -> Result<(), Failure> {
    let result = client.rna_quantifications().get(&fixtures.unknown_id);
    expect_status(
        format!("rnaQuantification `{}`", fixtures.unknown_id),
        result,
        404,
    )
}
