use super::*;
use crate::routes::{ROUTES, Resolution};
use crate::state::credentials::MemoryCredentials;

fn intent(full_path: &str) -> NavigationIntent {
    let path = split_location(full_path).path;
    match ROUTES.resolve(path) {
        Resolution::Matched(route) => NavigationIntent::from_match(full_path, Some("/"), &route),
        Resolution::NotFound => NavigationIntent::new(full_path, Some("/"), Vec::new()),
        Resolution::Redirect(target) => panic!("{full_path} redirects to {target}"),
    }
}

fn anonymous() -> NavigationGuard<MemoryCredentials> {
    NavigationGuard::new(MemoryCredentials::new())
}

fn signed_in(role: &str) -> NavigationGuard<MemoryCredentials> {
    NavigationGuard::new(MemoryCredentials::new().with_token("abc123").with_role(role))
}

fn login_redirect(requested: &str) -> NavigationDecision {
    NavigationDecision::RedirectTo {
        path: LOGIN_PATH.to_owned(),
        query: vec![(REDIRECT_QUERY_KEY.to_owned(), requested.to_owned())],
    }
}

const ADMIN_PATHS: &[&str] = &[
    "/productos/admin",
    "/entradasproductos/admin",
    "/entradasproductos/9",
    "/salidasproductos/admin",
    "/salidasproductos/9",
    "/movimientosinventario/admin",
    "/inventario/admin",
    "/categoriaproductos/admin",
    "/colores/admin",
    "/longitudes/admin",
    "/tamanos/admin",
    "/proveedores/admin",
    "/unidadesmedidas/admin",
    "/ubicaciones/admin",
    "/usuarios/admin",
    "/roles/admin",
    "/permisos/admin",
];

const PUBLIC_PATHS: &[&str] = &["/", "/productos", "/productos/3", "/productos-search", "/carrito", "/about"];

// =============================================================
// Scenarios
// =============================================================

#[test]
fn admin_on_login_page_goes_to_admin_product_list() {
    let decision = signed_in("admin").check(&intent("/login/admin"));
    assert_eq!(decision, NavigationDecision::RedirectTo { path: "/productos/admin".to_owned(), query: vec![] });
    assert_eq!(decision.href().as_deref(), Some("/productos/admin"));
}

#[test]
fn anonymous_admin_route_goes_to_login_with_redirect() {
    let decision = anonymous().check(&intent("/usuarios/admin"));
    assert_eq!(decision, login_redirect("/usuarios/admin"));
    assert_eq!(decision.href().as_deref(), Some("/login/admin?redirect=/usuarios/admin"));
}

#[test]
fn anonymous_public_route_proceeds() {
    assert_eq!(anonymous().check(&intent("/productos")), NavigationDecision::Proceed);
}

// =============================================================
// Properties
// =============================================================

#[test]
fn public_routes_proceed_for_any_credentials() {
    let guards = [
        anonymous(),
        signed_in("admin"),
        signed_in("cliente"),
        NavigationGuard::new(MemoryCredentials::new().with_role("admin")),
    ];
    for guard in &guards {
        for path in PUBLIC_PATHS {
            assert!(guard.check(&intent(path)).is_proceed(), "{path} should proceed");
        }
    }
}

#[test]
fn protected_routes_without_token_redirect_to_login() {
    let guard = NavigationGuard::new(MemoryCredentials::new().with_role("admin"));
    for path in ADMIN_PATHS {
        assert_eq!(guard.check(&intent(path)), login_redirect(path));
    }
}

#[test]
fn empty_token_counts_as_missing() {
    let guard = NavigationGuard::new(MemoryCredentials::new().with_token("").with_role("admin"));
    assert_eq!(guard.check(&intent("/roles/admin")), login_redirect("/roles/admin"));
}

#[test]
fn non_admin_with_token_goes_home() {
    for role in ["cliente", "Admin", ""] {
        let guard = signed_in(role);
        for path in ADMIN_PATHS {
            assert_eq!(guard.check(&intent(path)), NavigationDecision::RedirectTo {
                path: "/".to_owned(),
                query: vec![]
            });
        }
    }
}

#[test]
fn admin_with_token_proceeds_on_protected_routes() {
    let guard = signed_in("admin");
    for path in ADMIN_PATHS {
        assert!(guard.check(&intent(path)).is_proceed(), "{path} should proceed");
    }
}

#[test]
fn login_page_stays_reachable_for_non_admins() {
    assert!(anonymous().check(&intent("/login/admin")).is_proceed());
    assert!(signed_in("cliente").check(&intent("/login/admin")).is_proceed());
    let role_only = NavigationGuard::new(MemoryCredentials::new().with_role("admin"));
    assert!(role_only.check(&intent("/login/admin")).is_proceed());
}

#[test]
fn redirect_preserves_query_and_hash_of_requested_location() {
    let decision = anonymous().check(&intent("/inventario/admin?page=2#tabla"));
    assert_eq!(decision, login_redirect("/inventario/admin?page=2#tabla"));
    assert_eq!(decision.href().as_deref(), Some("/login/admin?redirect=/inventario/admin%3Fpage%3D2%23tabla"));
}

#[test]
fn unmatched_paths_proceed() {
    assert!(anonymous().check(&intent("/no-existe")).is_proceed());
}

#[test]
fn auth_only_chain_lets_any_role_through() {
    use crate::routes::{RouteMeta, ViewId};
    static ACCOUNT: RouteDescriptor = RouteDescriptor {
        path: "/cuenta",
        name: "Cuenta",
        view: Some(ViewId::Home),
        meta: RouteMeta { requires_auth: true, requires_admin: false },
        redirect: None,
        children: &[],
    };
    let intent = NavigationIntent::new("/cuenta", None, vec![&ACCOUNT]);
    assert!(signed_in("cliente").check(&intent).is_proceed());
    assert_eq!(anonymous().check(&intent), login_redirect("/cuenta"));
}

#[test]
fn decision_is_idempotent() {
    let guard = signed_in("cliente");
    let intent = intent("/permisos/admin");
    assert_eq!(guard.check(&intent), guard.check(&intent));
}

#[test]
fn shared_guard_reads_through_arc() {
    let guard = SharedGuard::shared(MemoryCredentials::new().with_token("t").with_role("admin"));
    assert!(guard.check(&intent("/colores/admin")).is_proceed());
}

#[test]
fn intent_splits_target_and_query() {
    let intent = intent("/productos-search?q=mesa");
    assert_eq!(intent.target_path, "/productos-search");
    assert_eq!(intent.query, vec![("q".to_owned(), "mesa".to_owned())]);
    assert_eq!(intent.origin_path.as_deref(), Some("/"));
}
