//! Cases for the variant annotation search endpoint.

use crate::Client;
use crate::check::Checks;
use crate::check::Violation;
use crate::fixtures;
use crate::fixtures::Fixtures;
use crate::protocol::VariantAnnotation;
use crate::protocol::annotation::TranscriptEffect;
use crate::protocol::search::Builder;
use crate::suite::Failure;

/// Starts a search of the test region within an annotation set.
fn region(set_id: &str, fixtures: &Fixtures) -> Builder {
    Builder::default()
        .variant_annotation_set_id(set_id)
        .reference_name(&fixtures.reference_name)
        .start(fixtures.start)
        .end(fixtures.end)
}

/// Runs `check` on every transcript effect of every annotation.
fn each_effect<F>(checks: &mut Checks, annotations: &[VariantAnnotation], mut check: F)
where
    F: FnMut(&mut Checks, &str, &TranscriptEffect),
{
    checks.each("variantAnnotations", annotations, |checks, subject, annotation| {
        checks.each(
            &format!("{subject}.transcriptEffects"),
            annotation.transcript_effects(),
            &mut check,
        );
    });
}

/// Searching the test region returns the expected number of annotations, each
/// with an id, a variant id, and the id of the searched set.
pub(crate) fn search(client: &Client, fixtures: &Fixtures) -> Result<(), Failure> {
    let set_id = fixtures::variant_annotation_set_id(client)?;
    let request = region(&set_id, fixtures).try_build()?;
    let annotations = client.variant_annotations().pages(request).records()?;

    let mut checks = Checks::default();
    checks
        .not_empty("variantAnnotations", &annotations)
        .has_size(
            "variantAnnotations",
            &annotations,
            fixtures.expected_annotations,
        )
        .each("variantAnnotations", &annotations, |checks, subject, annotation| {
            checks
                .present(format!("{subject}.id"), &annotation.id())
                .present(format!("{subject}.variantId"), &annotation.variant_id())
                .equal(
                    format!("{subject}.variantAnnotationSetId"),
                    &annotation.variant_annotation_set_id(),
                    &Some(set_id.as_str()),
                );
        });

    checks.finish()?;
    Ok(())
}

/// Every transcript effect in the test region carries a feature id,
/// alternate bases, an impact, and its effect terms.
pub(crate) fn transcript_effects(client: &Client, fixtures: &Fixtures) -> Result<(), Failure> {
    let set_id = fixtures::variant_annotation_set_id(client)?;
    let request = region(&set_id, fixtures).try_build()?;
    let annotations = client.variant_annotations().pages(request).records()?;

    let mut checks = Checks::default();
    checks.not_empty("variantAnnotations", &annotations);

    each_effect(&mut checks, &annotations, |checks, subject, effect| {
        checks
            .present(format!("{subject}.featureId"), &effect.feature_id())
            .present(format!("{subject}.alternateBases"), &effect.alternate_bases())
            .present(format!("{subject}.impact"), &effect.impact())
            .present(format!("{subject}.effects"), &effect.effects());
    });

    checks.finish()?;
    Ok(())
}

/// Filtering the test region by a feature returns the expected number of
/// annotations, and every transcript effect is on that feature.
pub(crate) fn search_by_feature(client: &Client, fixtures: &Fixtures) -> Result<(), Failure> {
    let set_id = fixtures::variant_annotation_set_id(client)?;
    let request = region(&set_id, fixtures)
        .push_feature_id(&fixtures.feature_id)
        .try_build()?;
    let annotations = client.variant_annotations().pages(request).records()?;

    let mut checks = Checks::default();
    checks
        .not_empty("variantAnnotations", &annotations)
        .has_size(
            "variantAnnotations",
            &annotations,
            fixtures.expected_annotations,
        );

    let feature_id = Some(fixtures.feature_id.as_str());
    each_effect(&mut checks, &annotations, |checks, subject, effect| {
        checks.equal(
            format!("{subject}.featureId"),
            &effect.feature_id(),
            &feature_id,
        );
    });

    checks.finish()?;
    Ok(())
}

/// Paging through the test region one annotation at a time returns the same
/// annotations, in the same order, as searching it with the server's default
/// page size.
pub(crate) fn paging(client: &Client, fixtures: &Fixtures) -> Result<(), Failure> {
    let set_id = fixtures::variant_annotation_set_id(client)?;
    let unpaged = region(&set_id, fixtures).try_build()?;
    let paged = region(&set_id, fixtures).page_size(1).try_build()?;

    let expected = client.variant_annotations().pages(unpaged).records()?;
    let actual = client.variant_annotations().pages(paged).records()?;

    let mut checks = Checks::default();
    checks
        .not_empty("variantAnnotations", &expected)
        .has_size("paged variantAnnotations", &actual, expected.len());

    for (index, (actual, expected)) in actual.iter().zip(&expected).enumerate() {
        checks.equal(
            format!("paged variantAnnotations[{index}].id"),
            &actual.id(),
            &expected.id(),
        );

        if actual.id() == expected.id() && actual != expected {
            checks.fail(Violation::new(
                format!("paged variantAnnotations[{index}]"),
                "the record returned by the unpaged search",
                "a different record",
            ));
        }
    }

    checks.finish()?;
    Ok(())
}
