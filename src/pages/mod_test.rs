use super::*;
use crate::router::RouteTable;

#[test]
fn nav_links_resolve_to_their_views() {
    let table = RouteTable::app().unwrap();
    for &(href, id) in NAV_LINKS {
        assert_eq!(table.lookup(href).map(|e| e.view), Some(id), "{href}");
    }
}

#[test]
fn nav_links_cover_every_route() {
    let table = RouteTable::app().unwrap();
    assert_eq!(NAV_LINKS.len(), table.len());
}
