use super::*;

impl OrganizationRepo for DbReadOnly<'_> {
    fn create_org(&self, _org: Organization) -> Result<()> {
        unreachable!();
    }
    fn add_org_member(&self, _member: &OrganizationMember) -> Result<()> {
        unreachable!();
    }

    fn get_org(&self, id: &str) -> Result<Organization> {
        get_org(&mut self.conn.borrow_mut(), id)
    }
    fn get_org_member(
        &self,
        org_id: &str,
        user_id: &str,
    ) -> Result<Option<OrganizationMember>> {
        get_org_member(&mut self.conn.borrow_mut(), org_id, user_id)
    }
}

impl OrganizationRepo for DbReadWrite<'_> {
    fn create_org(&self, org: Organization) -> Result<()> {
        create_org(&mut self.conn.borrow_mut(), org)
    }
    fn add_org_member(&self, member: &OrganizationMember) -> Result<()> {
        add_org_member(&mut self.conn.borrow_mut(), member)
    }

    fn get_org(&self, id: &str) -> Result<Organization> {
        get_org(&mut self.conn.borrow_mut(), id)
    }
    fn get_org_member(
        &self,
        org_id: &str,
        user_id: &str,
    ) -> Result<Option<OrganizationMember>> {
        get_org_member(&mut self.conn.borrow_mut(), org_id, user_id)
    }
}

impl OrganizationRepo for DbConnection<'_> {
    fn create_org(&self, org: Organization) -> Result<()> {
        create_org(&mut self.conn.borrow_mut(), org)
    }
    fn add_org_member(&self, member: &OrganizationMember) -> Result<()> {
        add_org_member(&mut self.conn.borrow_mut(), member)
    }

    fn get_org(&self, id: &str) -> Result<Organization> {
        get_org(&mut self.conn.borrow_mut(), id)
    }
    fn get_org_member(
        &self,
        org_id: &str,
        user_id: &str,
    ) -> Result<Option<OrganizationMember>> {
        get_org_member(&mut self.conn.borrow_mut(), org_id, user_id)
    }
}

fn create_org(conn: &mut SqliteConnection, org: Organization) -> Result<()> {
    let new_org = models::NewOrganization {
        id: org.id.as_ref(),
        name: &org.name,
    };
    diesel::insert_into(schema::organizations::table)
        .values(&new_org)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_org(conn: &mut SqliteConnection, id: &str) -> Result<Organization> {
    use schema::organizations::dsl;
    let models::OrganizationEntity { id, name, .. } = dsl::organizations
        .filter(dsl::id.eq(id))
        .first::<models::OrganizationEntity>(conn)
        .map_err(from_diesel_err)?;
    Ok(Organization {
        id: id.into(),
        name,
    })
}

fn add_org_member(conn: &mut SqliteConnection, member: &OrganizationMember) -> Result<()> {
    let org_rowid = resolve_org_rowid(conn, member.organization_id.as_str())?;
    let user_rowid = resolve_user_rowid(conn, member.user_id.as_str())?;
    let new_member = models::NewOrganizationMember {
        org_rowid,
        user_rowid,
        role: member.role as i16,
    };
    diesel::insert_into(schema::organization_members::table)
        .values(&new_member)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_org_member(
    conn: &mut SqliteConnection,
    org_id: &str,
    user_id: &str,
) -> Result<Option<OrganizationMember>> {
    use schema::{organization_members, organizations, users};
    let role = organization_members::table
        .inner_join(organizations::table)
        .inner_join(users::table)
        .select(organization_members::role)
        .filter(organizations::id.eq(org_id))
        .filter(users::id.eq(user_id))
        .first::<i16>(conn)
        .optional()
        .map_err(from_diesel_err)?;
    role.map(|role| {
        Ok(OrganizationMember {
            organization_id: org_id.into(),
            user_id: user_id.into(),
            role: util::member_role_from_i16(role)?,
        })
    })
    .transpose()
}
