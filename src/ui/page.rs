use crate::routing::{RouteTable, RouterError};

/// The render units the router mounts. Exactly one is on screen at a time;
/// the friend-funding overlay is a shell region, not a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    AnniversaryList,
    AccountList,
    AddressList,
    MyFunding,
    ProductList,
    ProductDetail,
    BrandStore,
    Wishlist,
    NotFound,
}

impl Default for Page {
    fn default() -> Self {
        Page::AnniversaryList
    }
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::AnniversaryList => "Anniversaries",
            Page::AccountList => "Accounts",
            Page::AddressList => "Addresses",
            Page::MyFunding => "My Funding",
            Page::ProductList => "Products",
            Page::ProductDetail => "Product Detail",
            Page::BrandStore => "Brand Store",
            Page::Wishlist => "Wishlist",
            Page::NotFound => "Not Found",
        }
    }
}

/// The application route table. Paths unknown to it land on `Page::NotFound`.
pub fn route_table() -> Result<RouteTable<Page>, RouterError> {
    RouteTable::builder()
        .route("/", Page::AnniversaryList)
        .route("/account-list-page", Page::AccountList)
        .route("/address-list-page", Page::AddressList)
        .route("/my-funding", Page::MyFunding)
        .route("/product", Page::ProductList)
        .route("/product/:productId", Page::ProductDetail)
        .route("/brand/:brandId", Page::BrandStore)
        .route("/wishlist/:userId", Page::Wishlist)
        .build(Page::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_table_builds() {
        let table = route_table().unwrap();
        assert_eq!(table.len(), 8);
    }

    #[test]
    fn test_every_route_mounts_its_page() {
        let table = route_table().unwrap();
        let cases = [
            ("/", Page::AnniversaryList),
            ("/account-list-page", Page::AccountList),
            ("/address-list-page", Page::AddressList),
            ("/my-funding", Page::MyFunding),
            ("/product", Page::ProductList),
            ("/product/42", Page::ProductDetail),
            ("/brand/acme", Page::BrandStore),
            ("/wishlist/7", Page::Wishlist),
        ];
        for (path, page) in cases {
            assert_eq!(table.resolve(path).page, page, "path {path}");
        }
    }

    #[test]
    fn test_route_params_are_exposed_by_name() {
        let table = route_table().unwrap();
        assert_eq!(
            table.resolve("/product/42").params.get("productId"),
            Some("42")
        );
        assert_eq!(
            table.resolve("/brand/acme").params.get("brandId"),
            Some("acme")
        );
        assert_eq!(table.resolve("/wishlist/7").params.get("userId"), Some("7"));
    }

    #[test]
    fn test_undefined_path_lands_on_not_found() {
        let table = route_table().unwrap();
        assert_eq!(table.resolve("/does-not-exist").page, Page::NotFound);
    }
}
