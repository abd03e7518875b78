//! random query generation for property tests and benchmarks

use rand::Rng;

use crate::graph::WeightT;
use crate::query::Query;

/// Generates a query with `cities` cities and `roads` random roads.
///
/// Road endpoints are uniform over `1..=cities` and may repeat, so the result
/// can contain self-loops and parallel roads.
pub fn random_query<R: Rng>(
    rng: &mut R,
    cities: u32,
    roads: usize,
    library_cost: WeightT,
    road_cost: WeightT,
) -> Query {
    let roads = if cities == 0 {
        Vec::new()
    } else {
        (0..roads)
            .map(|_| (rng.random_range(1..=cities), rng.random_range(1..=cities)))
            .collect()
    };

    Query {
        cities,
        library_cost,
        road_cost,
        roads,
    }
}

/// Generates a connected road network: a random spanning tree over all cities
/// plus `extra_roads` random roads.
pub fn random_connected_query<R: Rng>(
    rng: &mut R,
    cities: u32,
    extra_roads: usize,
    library_cost: WeightT,
    road_cost: WeightT,
) -> Query {
    let mut query = random_query(rng, cities, extra_roads, library_cost, road_cost);
    for city in 2..=cities {
        let parent = rng.random_range(1..city);
        query.roads.push((parent, city));
    }
    query
}
