//! Static route table for the storefront and the inventory admin area.
//!
//! SYSTEM CONTEXT
//! ==============
//! The table is plain `'static` data handed to the router host at startup.
//! It is split into a public list and a protected list; the protected list
//! has a single `/admin` parent whose children declare absolute paths but
//! still resolve with the parent at the head of their matched chain.
//!
//! MATCHING
//! ========
//! `:name` segments capture exactly one non-empty path segment. When several
//! records match the same path, the one with more static segments wins, so
//! `/productos/admin` is the admin list and not a product detail with
//! `id = "admin"`. Equal specificity falls back to declaration order.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::collections::BTreeMap;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login/admin";
pub const ADMIN_PARENT_PATH: &str = "/admin";
pub const ADMIN_HOME_PATH: &str = "/productos/admin";

/// Captured `:name` segments for a resolved route.
pub type RouteParams = BTreeMap<&'static str, String>;

/// Stable reference to the screen a route renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewId {
    Home,
    ProductList,
    ProductDetail,
    ProductsListSearch,
    LoginAdmin,
    CartPage,
    About,
    ProductListAdmin,
    EntradaProductoList,
    EntradaProductoDetalles,
    SalidaProductoList,
    SalidaProductoDetalles,
    MovimientoInventarioList,
    InventarioList,
    CategoriaListAdmin,
    ColoresListAdmin,
    LongitudesListAdmin,
    TamanosListAdmin,
    ProveedoresListAdmin,
    UnidadesMedidasListAdmin,
    UbicacionesListAdmin,
    UsuariosListAdmin,
    RolesListAdmin,
    PermisosListAdmin,
}

impl ViewId {
    /// Human-readable screen title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Inicio",
            Self::ProductList => "Productos",
            Self::ProductDetail => "Detalle de producto",
            Self::ProductsListSearch => "Resultados de búsqueda",
            Self::LoginAdmin => "Acceso de administrador",
            Self::CartPage => "Carrito",
            Self::About => "Acerca de",
            Self::ProductListAdmin => "Administrar productos",
            Self::EntradaProductoList => "Entradas de productos",
            Self::EntradaProductoDetalles => "Detalle de entrada",
            Self::SalidaProductoList => "Salidas de productos",
            Self::SalidaProductoDetalles => "Detalle de salida",
            Self::MovimientoInventarioList => "Movimientos de inventario",
            Self::InventarioList => "Inventario",
            Self::CategoriaListAdmin => "Categorías",
            Self::ColoresListAdmin => "Colores",
            Self::LongitudesListAdmin => "Longitudes",
            Self::TamanosListAdmin => "Tamaños",
            Self::ProveedoresListAdmin => "Proveedores",
            Self::UnidadesMedidasListAdmin => "Unidades de medida",
            Self::UbicacionesListAdmin => "Ubicaciones",
            Self::UsuariosListAdmin => "Usuarios",
            Self::RolesListAdmin => "Roles",
            Self::PermisosListAdmin => "Permisos",
        }
    }
}

/// Access-control flags attached to a route record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub requires_auth: bool,
    pub requires_admin: bool,
}

impl RouteMeta {
    pub const PUBLIC: Self = Self { requires_auth: false, requires_admin: false };
    pub const ADMIN: Self = Self { requires_auth: true, requires_admin: true };
}

/// One entry in the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub name: &'static str,
    /// `None` for grouping records that only redirect or nest children.
    pub view: Option<ViewId>,
    pub meta: RouteMeta,
    pub redirect: Option<&'static str>,
    pub children: &'static [RouteDescriptor],
}

impl RouteDescriptor {
    const fn page(path: &'static str, name: &'static str, view: ViewId) -> Self {
        Self { path, name, view: Some(view), meta: RouteMeta::PUBLIC, redirect: None, children: &[] }
    }

    const fn admin_page(path: &'static str, name: &'static str, view: ViewId) -> Self {
        Self { path, name, view: Some(view), meta: RouteMeta::ADMIN, redirect: None, children: &[] }
    }
}

pub const PUBLIC_ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor::page(HOME_PATH, "home", ViewId::Home),
    RouteDescriptor::page("/productos", "ProductList", ViewId::ProductList),
    RouteDescriptor::page("/productos/:id", "ProductosDetalle", ViewId::ProductDetail),
    RouteDescriptor::page("/productos-search", "ProductsListSearch", ViewId::ProductsListSearch),
    RouteDescriptor::page(LOGIN_PATH, "LoginAdmin", ViewId::LoginAdmin),
    RouteDescriptor::page("/carrito", "CartPage", ViewId::CartPage),
    RouteDescriptor::page("/about", "about", ViewId::About),
];

const ADMIN_CHILDREN: &[RouteDescriptor] = &[
    RouteDescriptor::admin_page(ADMIN_HOME_PATH, "ProductListAdmin", ViewId::ProductListAdmin),
    RouteDescriptor::admin_page("/entradasproductos/admin", "EntradaProductoList", ViewId::EntradaProductoList),
    RouteDescriptor::admin_page("/entradasproductos/:id", "EntradaProductoDetalles", ViewId::EntradaProductoDetalles),
    RouteDescriptor::admin_page("/salidasproductos/admin", "SalidaProductoList", ViewId::SalidaProductoList),
    RouteDescriptor::admin_page("/salidasproductos/:id", "SalidaProductoDetalles", ViewId::SalidaProductoDetalles),
    RouteDescriptor::admin_page(
        "/movimientosinventario/admin",
        "MovimientoInventarioList",
        ViewId::MovimientoInventarioList,
    ),
    RouteDescriptor::admin_page("/inventario/admin", "InventarioList", ViewId::InventarioList),
    RouteDescriptor::admin_page("/categoriaproductos/admin", "CategoriaListAdmin", ViewId::CategoriaListAdmin),
    RouteDescriptor::admin_page("/colores/admin", "ColoresListAdmin", ViewId::ColoresListAdmin),
    RouteDescriptor::admin_page("/longitudes/admin", "LongitudesListAdmin", ViewId::LongitudesListAdmin),
    RouteDescriptor::admin_page("/tamanos/admin", "TamanosListAdmin", ViewId::TamanosListAdmin),
    RouteDescriptor::admin_page("/proveedores/admin", "ProveedoresListAdmin", ViewId::ProveedoresListAdmin),
    RouteDescriptor::admin_page(
        "/unidadesmedidas/admin",
        "UnidadesMedidasListAdmin",
        ViewId::UnidadesMedidasListAdmin,
    ),
    RouteDescriptor::admin_page("/ubicaciones/admin", "UbicacionesListAdmin", ViewId::UbicacionesListAdmin),
    RouteDescriptor::admin_page("/usuarios/admin", "UsuariosListAdmin", ViewId::UsuariosListAdmin),
    RouteDescriptor::admin_page("/roles/admin", "RolesListAdmin", ViewId::RolesListAdmin),
    RouteDescriptor::admin_page("/permisos/admin", "PermisosListAdmin", ViewId::PermisosListAdmin),
];

pub const ADMIN_ROUTES: &[RouteDescriptor] = &[RouteDescriptor {
    path: ADMIN_PARENT_PATH,
    name: "admin",
    view: None,
    meta: RouteMeta::ADMIN,
    redirect: Some(ADMIN_HOME_PATH),
    children: ADMIN_CHILDREN,
}];

/// The application's full route table.
pub const ROUTES: RouteTable = RouteTable::new(PUBLIC_ROUTES, ADMIN_ROUTES);

// =============================================================================
// TABLE
// =============================================================================

/// Public records followed by protected records, in declaration order.
#[derive(Clone, Copy, Debug)]
pub struct RouteTable {
    public: &'static [RouteDescriptor],
    protected: &'static [RouteDescriptor],
}

/// Result of matching a path against the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    Matched(RouteMatch),
    /// The matched record redirects before any guard runs.
    Redirect(&'static str),
    NotFound,
}

/// A matched record chain, outermost first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch {
    pub chain: Vec<&'static RouteDescriptor>,
    pub params: RouteParams,
}

impl RouteMatch {
    /// The innermost matched record.
    pub fn leaf(&self) -> Option<&'static RouteDescriptor> {
        self.chain.last().copied()
    }

    pub fn requires_auth(&self) -> bool {
        chain_requires_auth(&self.chain)
    }

    pub fn requires_admin(&self) -> bool {
        chain_requires_admin(&self.chain)
    }
}

/// Whether any record in `chain` requires a signed-in user.
pub fn chain_requires_auth(chain: &[&RouteDescriptor]) -> bool {
    chain.iter().any(|record| record.meta.requires_auth)
}

/// Whether any record in `chain` requires the admin role.
pub fn chain_requires_admin(chain: &[&RouteDescriptor]) -> bool {
    chain.iter().any(|record| record.meta.requires_admin)
}

impl RouteTable {
    pub const fn new(public: &'static [RouteDescriptor], protected: &'static [RouteDescriptor]) -> Self {
        Self { public, protected }
    }

    /// Top-level records: the public list concatenated with the protected list.
    pub fn iter(&self) -> impl Iterator<Item = &'static RouteDescriptor> + use<> {
        self.public.iter().chain(self.protected.iter())
    }

    /// Every addressable record chain, parents before their children.
    pub fn chains(&self) -> Vec<Vec<&'static RouteDescriptor>> {
        let mut out = Vec::new();
        for record in self.iter() {
            collect_chains(record, &mut Vec::new(), &mut out);
        }
        out
    }

    /// Look up a record by its route name.
    pub fn by_name(&self, name: &str) -> Option<&'static RouteDescriptor> {
        self.chains().into_iter().filter_map(|chain| chain.last().copied()).find(|record| record.name == name)
    }

    /// Match `path` (no query or hash) against the table.
    pub fn resolve(&self, path: &str) -> Resolution {
        let segments = split_segments(path);
        let mut best: Option<(usize, Vec<&'static RouteDescriptor>, RouteParams)> = None;

        for chain in self.chains() {
            let Some(leaf) = chain.last() else {
                continue;
            };
            let Some((score, params)) = match_pattern(leaf.path, &segments) else {
                continue;
            };
            if best.as_ref().map_or(true, |(best_score, _, _)| score > *best_score) {
                best = Some((score, chain, params));
            }
        }

        let Some((_, chain, params)) = best else {
            return Resolution::NotFound;
        };
        if let Some(target) = chain.last().and_then(|record| record.redirect) {
            return Resolution::Redirect(target);
        }
        Resolution::Matched(RouteMatch { chain, params })
    }

    /// Paths of records inside a protected subtree that do not require auth.
    ///
    /// Empty for a well-formed table.
    pub fn protected_area_violations(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        for chain in self.chains() {
            let Some((leaf, ancestors)) = chain.split_last() else {
                continue;
            };
            let under_protected_root = chain
                .first()
                .is_some_and(|root| self.protected.iter().any(|record| std::ptr::eq(record, *root)));
            let inside_protected =
                under_protected_root || ancestors.iter().any(|record| record.meta.requires_auth);
            if inside_protected && !leaf.meta.requires_auth {
                out.push(leaf.path);
            }
        }
        out
    }
}

fn collect_chains(
    record: &'static RouteDescriptor,
    prefix: &mut Vec<&'static RouteDescriptor>,
    out: &mut Vec<Vec<&'static RouteDescriptor>>,
) {
    prefix.push(record);
    out.push(prefix.clone());
    for child in record.children {
        collect_chains(child, prefix, out);
    }
    prefix.pop();
}

fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|segment| !segment.is_empty()).collect()
}

/// Match a pattern against path segments, returning the count of static
/// segments and the captured params. Static segments compare ASCII
/// case-insensitively; captured params keep the requested case.
fn match_pattern(pattern: &'static str, segments: &[&str]) -> Option<(usize, RouteParams)> {
    let pattern_segments: Vec<&'static str> =
        pattern.split('/').filter(|segment| !segment.is_empty()).collect();
    if pattern_segments.len() != segments.len() {
        return None;
    }

    let mut statics = 0;
    let mut params = RouteParams::new();
    for (&expected, &actual) in pattern_segments.iter().zip(segments) {
        if let Some(name) = expected.strip_prefix(':') {
            params.insert(name, actual.to_owned());
        } else if expected.eq_ignore_ascii_case(actual) {
            statics += 1;
        } else {
            return None;
        }
    }
    Some((statics, params))
}
