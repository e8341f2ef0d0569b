use pricescout_common::{PricedItem, RankedItem};

/// Keep items with a finite price and a non-empty URL, sorted ascending by
/// price. The sort is stable: equal prices keep their input order.
pub fn rank(items: Vec<PricedItem>) -> Vec<RankedItem> {
    let mut ranked: Vec<RankedItem> = items
        .into_iter()
        .filter_map(|item| {
            let price = item.price.filter(|p| p.is_finite())?;
            let url = item.url.filter(|u| !u.is_empty())?;
            Some(RankedItem {
                name: item.name,
                price,
                url,
            })
        })
        .collect();

    ranked.sort_by(|a, b| a.price.total_cmp(&b.price));
    ranked
}
