//! Public catalog route paths.

/// `/marcas/{brand}`
pub fn brand_path(brand_slug: &str) -> String {
    format!("/marcas/{}", brand_slug)
}

/// `/marcas/{brand}/{model}`
pub fn model_path(brand_slug: &str, model_slug: &str) -> String {
    format!("/marcas/{}/{}", brand_slug, model_slug)
}

/// `/negocios/{business}`
pub fn business_path(business_slug: &str) -> String {
    format!("/negocios/{}", business_slug)
}

/// `/categorias/{category}`
pub fn category_path(category_slug: &str) -> String {
    format!("/categorias/{}", category_slug)
}

/// `/ciudad/{city}`
pub fn city_path(city_slug: &str) -> String {
    format!("/ciudad/{}", city_slug)
}
