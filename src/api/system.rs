//! System management API
//!
//! Roles, users and menus.

use super::DeleteIds;
use crate::client::ApiClient;
use crate::entity::{
    AllRole, CommonSearchParams, Menu, MenuButton, MenuList, MenuTree, Role, RoleList, RoleMenu,
    RoleSearchParams, User, UserList, UserSearchParams,
};
use crate::error::ApiResult;
use crate::transport::ApiRequest;

/// GET /system/role/list
pub async fn fetch_get_role_list(
    client: &ApiClient,
    params: Option<&RoleSearchParams>,
) -> ApiResult<RoleList> {
    let request = ApiRequest::get("/system/role/list").params(&params)?;
    client.request(request).await
}

/// POST /system/role/post
pub async fn post_role(client: &ApiClient, data: &Role) -> ApiResult<String> {
    let request = ApiRequest::post("/system/role/post").data(data)?;
    client.request(request).await
}

/// POST /system/role/del
pub async fn delete_role(client: &ApiClient, ids: &[i64]) -> ApiResult<String> {
    let request = ApiRequest::post("/system/role/del").data(&DeleteIds { ids })?;
    client.request(request).await
}

/// GET /system/role/all
///
/// Only enabled roles are returned.
pub async fn fetch_get_all_roles(client: &ApiClient) -> ApiResult<Vec<AllRole>> {
    client.request(ApiRequest::get("/system/role/all")).await
}

/// GET /system/role/menu - resource ids bound to a role
pub async fn fetch_get_role_menu(client: &ApiClient, params: &RoleMenu) -> ApiResult<Vec<i64>> {
    let request = ApiRequest::get("/system/role/menu").params(params)?;
    client.request(request).await
}

/// POST /system/role/bind_menu
pub async fn bind_role_menu(client: &ApiClient, data: &RoleMenu) -> ApiResult<String> {
    let request = ApiRequest::post("/system/role/bind_menu").data(data)?;
    client.request(request).await
}

/// GET /system/user/list
pub async fn fetch_get_user_list(
    client: &ApiClient,
    params: Option<&UserSearchParams>,
) -> ApiResult<UserList> {
    let request = ApiRequest::get("/system/user/list").params(&params)?;
    client.request(request).await
}

/// POST /system/user/post
pub async fn post_user(client: &ApiClient, data: &User) -> ApiResult<String> {
    let request = ApiRequest::post("/system/user/post").data(data)?;
    client.request(request).await
}

/// POST /system/user/del
pub async fn delete_user(client: &ApiClient, ids: &[i64]) -> ApiResult<String> {
    let request = ApiRequest::post("/system/user/del").data(&DeleteIds { ids })?;
    client.request(request).await
}

/// GET /system/menu/list
pub async fn fetch_get_menu_list(
    client: &ApiClient,
    params: Option<&CommonSearchParams>,
) -> ApiResult<MenuList> {
    let request = ApiRequest::get("/system/menu/list").params(&params)?;
    client.request(request).await
}

/// POST /system/menu/post
pub async fn post_menu(client: &ApiClient, data: &Menu) -> ApiResult<String> {
    let request = ApiRequest::post("/system/menu/post").data(data)?;
    client.request(request).await
}

/// POST /system/menu/del
pub async fn delete_menu(client: &ApiClient, ids: &[i64]) -> ApiResult<String> {
    let request = ApiRequest::post("/system/menu/del").data(&DeleteIds { ids })?;
    client.request(request).await
}

/// GET /system/getAllPages - page component names
pub async fn fetch_get_all_pages(client: &ApiClient) -> ApiResult<Vec<String>> {
    client.request(ApiRequest::get("/system/getAllPages")).await
}

/// GET /system/menu/tree
pub async fn fetch_get_menu_tree(client: &ApiClient) -> ApiResult<Vec<MenuTree>> {
    client.request(ApiRequest::get("/system/menu/tree")).await
}

/// GET /system/menu/button
pub async fn fetch_get_menu_button(client: &ApiClient) -> ApiResult<Vec<MenuButton>> {
    client.request(ApiRequest::get("/system/menu/button")).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{
        EnableStatus, IconType, MenuFields, MenuPropsOfRoute, MenuType, RoleFields, RoleMenuMode,
        UserFields, UserGender,
    };
    use crate::transport::mock;
    use reqwest::Method;
    use serde_json::{json, Value};
    use tokio_test::block_on;

    fn empty_page() -> Value {
        json!({"current": 1, "size": 10, "total": 0, "list": []})
    }

    fn assert_call(request: &ApiRequest, method: Method, url: &str) {
        assert_eq!(request.method, method);
        assert_eq!(request.url, url);
    }

    #[test]
    fn role_list() {
        let (client, transport) = mock::client(json!({
            "current": 1, "size": 10, "total": 1,
            "list": [{"id": 1, "status": 1, "name": "Admin", "code": "R_ADMIN", "desc": ""}]
        }));
        let params = RoleSearchParams {
            code: Some("R_ADMIN".to_string()),
            current: Some(1),
            size: Some(10),
            ..Default::default()
        };
        let list = block_on(fetch_get_role_list(&client, Some(&params))).unwrap();
        assert_eq!(list.total, 1);
        assert_eq!(list.list[0].name, "Admin");

        let request = transport.last();
        assert_call(&request, Method::GET, "/system/role/list");
        assert_eq!(request.params, Some(json!({"code": "R_ADMIN", "current": 1, "size": 10})));
        assert!(request.data.is_none());
    }

    #[test]
    fn role_list_without_params() {
        let (client, transport) = mock::client(empty_page());
        block_on(fetch_get_role_list(&client, None)).unwrap();
        assert!(transport.last().params.is_none());
    }

    #[test]
    fn post_role_sends_record() {
        let (client, transport) = mock::client(json!("ok"));
        let role = Role::new(
            0,
            Some(EnableStatus::Enable),
            RoleFields {
                name: "Auditor".to_string(),
                code: "R_AUDIT".to_string(),
                desc: "read only".to_string(),
            },
        );
        assert_eq!(block_on(post_role(&client, &role)).unwrap(), "ok");

        let request = transport.last();
        assert_call(&request, Method::POST, "/system/role/post");
        assert_eq!(request.data, Some(serde_json::to_value(&role).unwrap()));
    }

    #[test]
    fn delete_role_posts_ids() {
        let (client, transport) = mock::client(json!("deleted 3"));
        let result = block_on(delete_role(&client, &[1, 2, 3])).unwrap();
        assert_eq!(result, "deleted 3");

        let request = transport.last();
        assert_call(&request, Method::POST, "/system/role/del");
        assert_eq!(request.data, Some(json!({"ids": [1, 2, 3]})));
        assert!(request.params.is_none());
    }

    #[test]
    fn all_roles() {
        let (client, transport) = mock::client(json!([
            {"id": 1, "name": "Super", "code": "R_SUPER"},
            {"id": 2, "name": "Admin", "code": "R_ADMIN"}
        ]));
        let roles = block_on(fetch_get_all_roles(&client)).unwrap();
        assert_eq!(roles.len(), 2);
        assert_call(&transport.last(), Method::GET, "/system/role/all");
    }

    #[test]
    fn role_menu_query_and_bind() {
        let (client, transport) = mock::client(json!([3, 4]));
        let query = RoleMenu::query(2, RoleMenuMode::Button);
        assert_eq!(block_on(fetch_get_role_menu(&client, &query)).unwrap(), vec![3, 4]);
        let request = transport.last();
        assert_call(&request, Method::GET, "/system/role/menu");
        assert_eq!(request.params, Some(json!({"roleId": 2, "mode": 2})));

        let (client, transport) = mock::client(json!("bound"));
        let bind = RoleMenu::bind(2, RoleMenuMode::Menu, vec![1, 7]);
        assert_eq!(block_on(bind_role_menu(&client, &bind)).unwrap(), "bound");
        let request = transport.last();
        assert_call(&request, Method::POST, "/system/role/bind_menu");
        assert_eq!(request.data, Some(json!({"roleId": 2, "mode": 1, "ids": [1, 7]})));
    }

    #[test]
    fn user_calls() {
        let (client, transport) = mock::client(empty_page());
        let params = UserSearchParams {
            username: Some("soy".to_string()),
            status: Some(EnableStatus::Disable),
            ..Default::default()
        };
        block_on(fetch_get_user_list(&client, Some(&params))).unwrap();
        let request = transport.last();
        assert_call(&request, Method::GET, "/system/user/list");
        assert_eq!(request.params, Some(json!({"username": "soy", "status": 2})));

        let (client, transport) = mock::client(json!("ok"));
        let user = User::new(
            5,
            None,
            UserFields {
                username: "soy".to_string(),
                user_gender: Some(UserGender::Male),
                roles: vec!["R_USER".to_string()],
                ..Default::default()
            },
        );
        block_on(post_user(&client, &user)).unwrap();
        let request = transport.last();
        assert_call(&request, Method::POST, "/system/user/post");
        assert_eq!(request.data, Some(serde_json::to_value(&user).unwrap()));

        let (client, transport) = mock::client(json!("ok"));
        block_on(delete_user(&client, &[5])).unwrap();
        let request = transport.last();
        assert_call(&request, Method::POST, "/system/user/del");
        assert_eq!(request.data, Some(json!({"ids": [5]})));
    }

    #[test]
    fn menu_calls() {
        let (client, transport) = mock::client(empty_page());
        block_on(fetch_get_menu_list(&client, Some(&CommonSearchParams::page(1, 1000)))).unwrap();
        let request = transport.last();
        assert_call(&request, Method::GET, "/system/menu/list");
        assert_eq!(request.params, Some(json!({"current": 1, "size": 1000})));

        let (client, transport) = mock::client(json!("ok"));
        let menu = Menu::new(
            0,
            Some(EnableStatus::Enable),
            MenuFields {
                parent_id: 0,
                menu_type: MenuType::Menu,
                menu_name: "about".to_string(),
                route_name: "about".to_string(),
                route_path: "/about".to_string(),
                component: Some("layout.base$view.about".to_string()),
                icon: "fluent:book-information-24-regular".to_string(),
                icon_type: IconType::Iconify,
                buttons: None,
                children: None,
                route_props: MenuPropsOfRoute {
                    i18n_key: Some("route.about".to_string()),
                    order: Some(10),
                    ..Default::default()
                },
            },
        );
        block_on(post_menu(&client, &menu)).unwrap();
        let request = transport.last();
        assert_call(&request, Method::POST, "/system/menu/post");
        assert_eq!(request.data, Some(serde_json::to_value(&menu).unwrap()));

        let (client, transport) = mock::client(json!("ok"));
        block_on(delete_menu(&client, &[8, 9])).unwrap();
        let request = transport.last();
        assert_call(&request, Method::POST, "/system/menu/del");
        assert_eq!(request.data, Some(json!({"ids": [8, 9]})));
    }

    #[test]
    fn menu_lookups() {
        let (client, transport) = mock::client(json!(["home", "about"]));
        assert_eq!(block_on(fetch_get_all_pages(&client)).unwrap(), vec!["home", "about"]);
        assert_call(&transport.last(), Method::GET, "/system/getAllPages");

        let (client, transport) = mock::client(json!([{"id": 1, "label": "home", "pId": 0}]));
        assert_eq!(block_on(fetch_get_menu_tree(&client)).unwrap()[0].label, "home");
        assert_call(&transport.last(), Method::GET, "/system/menu/tree");

        let (client, transport) = mock::client(json!([
            {"id": 1, "code": "B_ADD", "desc": "add", "label": "Add"}
        ]));
        assert_eq!(block_on(fetch_get_menu_button(&client)).unwrap()[0].code, "B_ADD");
        assert_call(&transport.last(), Method::GET, "/system/menu/button");
    }

    #[test]
    fn one_transport_call_per_function() {
        let (client, transport) = mock::client(json!("ok"));
        block_on(delete_role(&client, &[1])).unwrap();
        block_on(delete_user(&client, &[1])).unwrap();
        assert_eq!(transport.requests().len(), 2);
    }

    #[test]
    fn backend_errors_are_not_translated() {
        let (client, _) = mock::failing_client("1001", "role code exists");
        let role = Role::new(0, None, RoleFields::default());
        let err = block_on(post_role(&client, &role)).unwrap_err();
        assert_eq!(err.backend_code(), Some("1001"));
        assert_eq!(err.to_string(), "Backend error 1001: role code exists");
    }
}
